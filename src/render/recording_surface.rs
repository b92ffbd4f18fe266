use serde::{Deserialize, Serialize};

use crate::error::PlotResult;
use crate::render::{Color, DrawingSurface};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke,
    Fill,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
}

impl SurfaceCommand {
    #[must_use]
    pub fn is_path_segment(self) -> bool {
        matches!(
            self,
            Self::MoveTo { .. } | Self::LineTo { .. } | Self::Arc { .. }
        )
    }
}

/// Snapshot of the current path taken at a `stroke` or `fill` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedPath {
    pub color: Color,
    pub line_width: f64,
    pub segments: Vec<SurfaceCommand>,
}

/// Headless surface used by tests and headless plotting.
///
/// Every call is appended to a command log, and every `stroke`/`fill` keeps a
/// snapshot of the path it painted together with the active style.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    current_path: Vec<SurfaceCommand>,
    commands: Vec<SurfaceCommand>,
    strokes: Vec<PaintedPath>,
    fills: Vec<PaintedPath>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: 1.0,
            current_path: Vec::new(),
            commands: Vec::new(),
            strokes: Vec::new(),
            fills: Vec::new(),
        }
    }

    /// Changes the reported size. Plotters bound to this surface keep their
    /// geometry until they are refreshed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    #[must_use]
    pub fn strokes(&self) -> &[PaintedPath] {
        &self.strokes
    }

    #[must_use]
    pub fn fills(&self) -> &[PaintedPath] {
        &self.fills
    }

    /// Drops the recorded log while keeping size and style state.
    pub fn clear(&mut self) {
        self.current_path.clear();
        self.commands.clear();
        self.strokes.clear();
        self.fills.clear();
    }

    fn record_segment(&mut self, command: SurfaceCommand) {
        self.current_path.push(command);
        self.commands.push(command);
    }

    fn snapshot(&self, color: Color) -> PaintedPath {
        PaintedPath {
            color,
            line_width: self.line_width,
            segments: self.current_path.clone(),
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.current_path.clear();
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record_segment(SurfaceCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record_segment(SurfaceCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.record_segment(SurfaceCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) -> PlotResult<()> {
        self.commands.push(SurfaceCommand::Stroke);
        let painted = self.snapshot(self.stroke_color);
        self.strokes.push(painted);
        Ok(())
    }

    fn fill(&mut self) -> PlotResult<()> {
        self.commands.push(SurfaceCommand::Fill);
        let painted = self.snapshot(self.fill_color);
        self.fills.push(painted);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.commands.push(SurfaceCommand::SetLineWidth(width));
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordingSurface, SurfaceCommand};
    use crate::render::{Color, DrawingSurface};

    #[test]
    fn stroke_snapshots_current_path_and_style() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.begin_path();
        surface.set_stroke_color(Color::WHITE);
        surface.set_line_width(2.5);
        surface.move_to(0.0, 0.0);
        surface.line_to(5.0, 5.0);
        surface.stroke().expect("stroke");

        let strokes = surface.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].color, Color::WHITE);
        assert_eq!(strokes[0].line_width, 2.5);
        assert_eq!(
            strokes[0].segments,
            vec![
                SurfaceCommand::MoveTo { x: 0.0, y: 0.0 },
                SurfaceCommand::LineTo { x: 5.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn begin_path_discards_previous_segments() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.move_to(1.0, 1.0);
        surface.begin_path();
        surface.line_to(2.0, 2.0);
        surface.fill().expect("fill");

        assert_eq!(surface.fills()[0].segments.len(), 1);
        assert_eq!(surface.commands().len(), 4);
    }
}
