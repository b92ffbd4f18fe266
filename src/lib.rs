//! fngraph: function graph and coordinate axis plotting.
//!
//! A [`Plotter`] binds to a caller-owned [`DrawingSurface`], derives a
//! pixel-space origin and sampling bounds from the surface size and a
//! [`PlotterConfig`], and draws axes, function polylines and point markers
//! through the surface's path primitives.
//!
//! ```
//! use fngraph::{Plotter, PlotterConfig};
//! use fngraph::render::RecordingSurface;
//!
//! let mut surface = RecordingSurface::new(400, 300);
//! let mut plotter = Plotter::new(&mut surface, PlotterConfig::default());
//! plotter.draw_axes().unwrap();
//! plotter.draw_graph(|x: f64| x.sin(), None).unwrap();
//! plotter.draw_plotted_value(|x: f64| x.sin(), 75.0).unwrap();
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{AxisDrawStats, GraphTrace, Plotter};
pub use config::PlotterConfig;
pub use error::{PlotError, PlotResult};
pub use render::DrawingSurface;
