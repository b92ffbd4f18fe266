use std::io::Write;

use cairo::{Context, Format, ImageSurface};

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, DrawingSurface};

/// Cairo implementation of [`DrawingSurface`].
///
/// This surface supports two modes:
/// - offscreen image-surface rendering created by [`CairoSurface::new`]
/// - in-place rendering on an external Cairo context (for example a GTK
///   `DrawingArea` callback) through [`CairoSurface::for_context`]
///
/// Cairo keeps a single source pattern, so stroke and fill colors are stored
/// here and applied right before painting.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    width: u32,
    height: u32,
    stroke_color: Color,
    fill_color: Color,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidViewport {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        Ok(Self {
            context,
            image: Some(image),
            width: width.unsigned_abs(),
            height: height.unsigned_abs(),
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        })
    }

    /// Wraps a context owned by someone else, such as a widget draw callback.
    #[must_use]
    pub fn for_context(context: Context, width: u32, height: u32) -> Self {
        Self {
            context,
            image: None,
            width,
            height,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        }
    }

    /// Paints the whole surface with `color`, discarding any current path.
    pub fn clear(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.context.new_path();
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    /// Encodes the offscreen image as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> PlotResult<()> {
        let Some(image) = &self.image else {
            return Err(PlotError::Backend(
                "png export needs an offscreen surface".to_owned(),
            ));
        };
        image.flush();
        image
            .write_to_png(writer)
            .map_err(|err| PlotError::Backend(format!("failed to write png: {err}")))
    }
}

impl DrawingSurface for CairoSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) -> PlotResult<()> {
        apply_color(&self.context, self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> PlotResult<()> {
        apply_color(&self.context, self.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
