mod primitives;
mod recording_surface;
mod surface;

pub use primitives::Color;
pub use recording_surface::{PaintedPath, RecordingSurface, SurfaceCommand};
pub use surface::DrawingSurface;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
