pub mod geometry;
pub mod ticks;
pub mod types;

pub use geometry::{PlotGeometry, round_half_up};
pub use ticks::{TickLayout, tick_divisor};
pub use types::{PixelPoint, Viewport};
