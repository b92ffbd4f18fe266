use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::TickLayout;
use crate::error::PlotResult;
use crate::render::DrawingSurface;

use super::Plotter;

/// What one `draw_axes` pass put on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisDrawStats {
    pub x_axis_drawn: bool,
    pub y_axis_drawn: bool,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl<S: DrawingSurface + ?Sized> Plotter<'_, S> {
    /// Draws the axis lines and tick marks as a single stroked path.
    pub fn draw_axes(&mut self) -> PlotResult<AxisDrawStats> {
        let axes = &self.config.axes;
        let markings = &axes.markings;
        let width = self.viewport.width_px();
        let height = self.viewport.height_px();
        let geometry = self.geometry;
        let surface = &mut *self.surface;

        surface.begin_path();
        surface.set_stroke_color(axes.stroke_color);
        surface.set_line_width(axes.line_width);

        let mut stats = AxisDrawStats::default();
        if axes.show_x {
            surface.move_to(geometry.x_min, geometry.y0);
            surface.line_to(width, geometry.y0);
            stats.x_axis_drawn = true;
        }
        if axes.show_y {
            if axes.show_negative_y {
                surface.move_to(geometry.x0, 0.0);
                surface.line_to(geometry.x0, height);
            } else {
                surface.move_to(geometry.x0, -geometry.y0);
                surface.line_to(geometry.x0, (height / 2.0).ceil());
            }
            stats.y_axis_drawn = true;
        }

        let ticks = TickLayout::compute(self.viewport, geometry, &self.config);
        for &column in &ticks.x_columns {
            let column = column as f64;
            surface.move_to(column, geometry.y0 + markings.x_height);
            surface.line_to(column, geometry.y0 - markings.x_height);
        }
        for &row in &ticks.y_rows {
            let row = row as f64;
            surface.move_to(geometry.x0 + markings.y_width, row);
            surface.line_to(geometry.x0 - markings.y_width, row);
        }
        stats.x_ticks = ticks.x_columns.len();
        stats.y_ticks = ticks.y_rows.len();

        surface.stroke()?;
        trace!(
            x_ticks = stats.x_ticks,
            y_ticks = stats.y_ticks,
            "drew axes"
        );
        Ok(stats)
    }
}
