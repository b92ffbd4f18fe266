mod axis_renderer;
mod graph_renderer;
mod plotter;
mod point_renderer;

pub use axis_renderer::AxisDrawStats;
pub use graph_renderer::GraphTrace;
pub use plotter::Plotter;
