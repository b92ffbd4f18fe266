use tracing::trace;

use crate::core::PixelPoint;
use crate::error::PlotResult;
use crate::render::{Color, DrawingSurface};

use super::Plotter;

/// One function to trace, with an optional stroke color overriding
/// `graph.stroke_color`.
#[derive(Clone, Copy)]
pub struct GraphTrace<'f> {
    pub function: &'f dyn Fn(f64) -> f64,
    pub stroke_color: Option<Color>,
}

impl<'f> GraphTrace<'f> {
    #[must_use]
    pub fn new(function: &'f dyn Fn(f64) -> f64) -> Self {
        Self {
            function,
            stroke_color: None,
        }
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }
}

impl std::fmt::Debug for GraphTrace<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphTrace")
            .field("stroke_color", &self.stroke_color)
            .finish_non_exhaustive()
    }
}

impl<S: DrawingSurface + ?Sized> Plotter<'_, S> {
    /// Samples `function` at every index from `plotting_min` to
    /// `plotting_max` and returns the pixel-space polyline.
    ///
    /// Non-finite outputs are kept as they are.
    #[must_use]
    pub fn sample_graph<F>(&self, function: &F) -> Vec<PixelPoint>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let geometry = self.geometry;
        let step = self.config.graph.smoothness_scale;
        let scale = self.config.axes.scale;

        let mut points = Vec::with_capacity(geometry.sample_count());
        if geometry.sample_count() == 0 {
            return points;
        }
        for index in geometry.plotting_min..=geometry.plotting_max {
            points.push(geometry.project_sample(function, index as f64, step, scale));
        }
        points
    }

    /// Traces `function` as one stroked polyline.
    ///
    /// Returns the number of samples drawn.
    pub fn draw_graph<F>(&mut self, function: F, stroke_color: Option<Color>) -> PlotResult<usize>
    where
        F: Fn(f64) -> f64,
    {
        let color = stroke_color.unwrap_or(self.config.graph.stroke_color);
        self.trace_polyline(&function, color)
    }

    /// Traces several functions, one stroke per trace.
    ///
    /// Returns the total number of samples drawn.
    pub fn draw_graphs(&mut self, traces: &[GraphTrace<'_>]) -> PlotResult<usize> {
        let mut drawn = 0;
        for trace in traces {
            let color = trace.stroke_color.unwrap_or(self.config.graph.stroke_color);
            drawn += self.trace_polyline(trace.function, color)?;
        }
        Ok(drawn)
    }

    fn trace_polyline<F>(&mut self, function: &F, color: Color) -> PlotResult<usize>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let points = self.sample_graph(function);
        let Some((first, rest)) = points.split_first() else {
            trace!("plotting bounds are empty, skipping graph");
            return Ok(0);
        };

        let surface = &mut *self.surface;
        surface.begin_path();
        surface.set_line_width(self.config.graph.line_width);
        surface.set_stroke_color(color);
        surface.move_to(first.x, first.y);
        for point in rest {
            surface.line_to(point.x, point.y);
        }
        surface.stroke()?;

        trace!(samples = points.len(), color = %color, "drew graph");
        Ok(points.len())
    }
}
