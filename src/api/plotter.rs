use serde_json::Value;
use tracing::debug;

use crate::config::PlotterConfig;
use crate::core::{PlotGeometry, Viewport};
use crate::error::PlotResult;
use crate::render::DrawingSurface;

/// Function and axis plotter bound to a caller-owned drawing surface.
///
/// Configuration and derived geometry are fixed between explicit
/// [`refresh_geometry`](Self::refresh_geometry) or
/// [`reconfigure`](Self::reconfigure) calls; every draw method is a stateless
/// sequence of surface primitives against them.
pub struct Plotter<'s, S: DrawingSurface + ?Sized> {
    pub(crate) surface: &'s mut S,
    pub(crate) config: PlotterConfig,
    pub(crate) viewport: Viewport,
    pub(crate) geometry: PlotGeometry,
}

impl<'s, S: DrawingSurface + ?Sized> Plotter<'s, S> {
    /// Binds a plotter to `surface` with a typed configuration.
    ///
    /// Unusable values in `config` are logged and replaced by defaults.
    pub fn new(surface: &'s mut S, config: PlotterConfig) -> Self {
        let config = config.sanitized();
        let viewport = surface.viewport();
        let geometry = PlotGeometry::derive(viewport, &config);
        log_geometry(viewport, geometry);
        Self {
            surface,
            config,
            viewport,
            geometry,
        }
    }

    /// Binds a plotter to `surface`, deep-merging a partial JSON override onto
    /// the default configuration.
    pub fn with_overrides(surface: &'s mut S, overrides: &Value) -> PlotResult<Self> {
        let config = PlotterConfig::resolve(overrides)?;
        Ok(Self::new(surface, config))
    }

    #[must_use]
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Surface size the current geometry was derived from.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Mutable surface access, e.g. to resize it. Call
    /// [`refresh_geometry`](Self::refresh_geometry) afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Re-reads the surface size and re-derives geometry.
    pub fn refresh_geometry(&mut self) {
        self.viewport = self.surface.viewport();
        self.geometry = PlotGeometry::derive(self.viewport, &self.config);
        log_geometry(self.viewport, self.geometry);
    }

    /// Merges further overrides onto the current configuration and re-derives
    /// geometry. On error the plotter is left unchanged.
    pub fn reconfigure(&mut self, overrides: &Value) -> PlotResult<()> {
        self.config = self.config.merged(overrides)?;
        self.refresh_geometry();
        Ok(())
    }

    /// Replaces the whole configuration and re-derives geometry.
    pub fn set_config(&mut self, config: PlotterConfig) {
        self.config = config.sanitized();
        self.refresh_geometry();
    }
}

fn log_geometry(viewport: Viewport, geometry: PlotGeometry) {
    debug!(
        width = viewport.width,
        height = viewport.height,
        x0 = geometry.x0,
        y0 = geometry.y0,
        plotting_min = geometry.plotting_min,
        plotting_max = geometry.plotting_max,
        "derived plot geometry"
    );
}
