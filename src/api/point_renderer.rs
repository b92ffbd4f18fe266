use std::f64::consts::TAU;

use tracing::{trace, warn};

use crate::core::PixelPoint;
use crate::error::PlotResult;
use crate::render::DrawingSurface;

use super::Plotter;

impl<S: DrawingSurface + ?Sized> Plotter<'_, S> {
    /// Maps a percent of the plotting width onto a sample index.
    ///
    /// Values outside `[0, 100]` are logged and rejected with
    /// [`PlotError::InvalidPercent`](crate::error::PlotError::InvalidPercent).
    pub fn x_index_from_percent(&self, percent: f64) -> PlotResult<i64> {
        self.geometry
            .x_index_from_percent(percent)
            .inspect_err(|err| warn!(percent, error = %err, "rejected point percentage"))
    }

    /// Resolves the sample index a point marker is drawn at, honoring
    /// `point.do_percent`.
    pub fn resolve_point_index(&self, value: f64) -> PlotResult<f64> {
        if self.config.point.do_percent {
            self.x_index_from_percent(value).map(|index| index as f64)
        } else {
            Ok(value)
        }
    }

    /// Pixel position of `function` at `value` without drawing anything.
    pub fn locate_plotted_value<F>(&self, function: &F, value: f64) -> PlotResult<PixelPoint>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let index = self.resolve_point_index(value)?;
        Ok(self.geometry.project_sample(
            function,
            index,
            self.config.graph.smoothness_scale,
            self.config.axes.scale,
        ))
    }

    /// Draws a filled circular marker on `function` at `value`.
    ///
    /// `value` is a percent of the plotting width when `point.do_percent` is
    /// set, otherwise a raw sample index. An invalid percent skips the draw and
    /// returns the error.
    pub fn draw_plotted_value<F>(&mut self, function: F, value: f64) -> PlotResult<PixelPoint>
    where
        F: Fn(f64) -> f64,
    {
        let position = self.locate_plotted_value(&function, value)?;
        let point = &self.config.point;
        let surface = &mut *self.surface;

        surface.begin_path();
        surface.arc(position.x, position.y, point.radius, 0.0, TAU);
        surface.set_stroke_color(point.stroke_color);
        surface.set_line_width(point.line_width);
        surface.stroke()?;
        surface.set_fill_color(point.fill_color);
        surface.fill()?;

        trace!(x = position.x, y = position.y, "drew plotted value");
        Ok(position)
    }
}
