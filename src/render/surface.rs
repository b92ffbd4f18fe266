use crate::core::Viewport;
use crate::error::PlotResult;
use crate::render::Color;

/// Imperative 2D path API the plotter draws through.
///
/// The contract mirrors an HTML-canvas style context: path construction is
/// separate from painting, and `stroke`/`fill` paint the current path without
/// discarding it, so a marker can be stroked and then filled. Stroke color,
/// fill color and line width are sticky surface state.
pub trait DrawingSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a clockwise arc around `(x, y)`; angles are in radians.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn stroke(&mut self) -> PlotResult<()>;

    fn fill(&mut self) -> PlotResult<()>;

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width(), self.height())
    }
}
