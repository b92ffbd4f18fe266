use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::Color;

/// Unknown keys found in an override object, kept verbatim.
pub type Passthrough = IndexMap<String, Value>;

/// Fully resolved plotter configuration.
///
/// Every field always carries a concrete value. Partial configurations are
/// merged onto [`PlotterConfig::default`] by [`PlotterConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub axes: AxesConfig,
    pub graph: GraphConfig,
    pub point: PointConfig,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Horizontal shift of the origin from the surface center, in pixels.
    pub x_offset: f64,
    /// Vertical shift of the origin from the surface center, in pixels.
    pub y_offset: f64,
    /// Pixels per domain unit.
    pub scale: f64,
    pub show_negative_x: bool,
    pub show_negative_y: bool,
    pub stroke_color: Color,
    pub line_width: f64,
    pub show_x: bool,
    pub show_y: bool,
    pub markings: MarkingsConfig,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingsConfig {
    pub show_x: bool,
    pub show_y: bool,
    /// Number of tick intervals across the visible x span. Zero disables
    /// the x ticks; fractional counts widen the spacing proportionally.
    pub x_interval: f64,
    /// Number of tick intervals across the surface height.
    pub y_interval: f64,
    /// Half-length of each x tick.
    pub x_height: f64,
    /// Half-length of each y tick.
    pub y_width: f64,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub stroke_color: Color,
    pub line_width: f64,
    /// Pixel step between consecutive samples. Larger is coarser.
    pub smoothness_scale: f64,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointConfig {
    pub stroke_color: Color,
    pub line_width: f64,
    pub radius: f64,
    pub fill_color: Color,
    /// Address points by percent of the plotting width instead of by raw
    /// sample index.
    pub do_percent: bool,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            scale: 40.0,
            show_negative_x: true,
            show_negative_y: true,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            show_x: true,
            show_y: true,
            markings: MarkingsConfig::default(),
            extra: Passthrough::new(),
        }
    }
}

impl Default for MarkingsConfig {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: true,
            x_interval: 10.0,
            y_interval: 10.0,
            x_height: 5.0,
            y_width: 5.0,
            extra: Passthrough::new(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            stroke_color: Color::from_rgb8(0x1f, 0xcd, 0x38),
            line_width: 3.0,
            smoothness_scale: 4.0,
            extra: Passthrough::new(),
        }
    }
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            stroke_color: Color::from_rgb8(0xe6, 0x1a, 0x3f),
            line_width: 11.0,
            radius: 3.0,
            fill_color: Color::BLACK,
            do_percent: true,
            extra: Passthrough::new(),
        }
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            axes: AxesConfig::default(),
            graph: GraphConfig::default(),
            point: PointConfig::default(),
            extra: Passthrough::new(),
        }
    }
}

impl PlotterConfig {
    /// Moves the origin away from the surface center.
    #[must_use]
    pub fn with_origin_offset(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.axes.x_offset = x_offset;
        self.axes.y_offset = y_offset;
        self
    }

    /// Sets pixels per domain unit.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.axes.scale = scale;
        self
    }

    /// Sets which negative half-planes are visible.
    #[must_use]
    pub fn with_negative_ranges(mut self, show_negative_x: bool, show_negative_y: bool) -> Self {
        self.axes.show_negative_x = show_negative_x;
        self.axes.show_negative_y = show_negative_y;
        self
    }

    /// Sets the number of tick intervals on each axis.
    #[must_use]
    pub fn with_tick_intervals(mut self, x_interval: f64, y_interval: f64) -> Self {
        self.axes.markings.x_interval = x_interval;
        self.axes.markings.y_interval = y_interval;
        self
    }

    /// Sets the pixel step between sampled points.
    #[must_use]
    pub fn with_smoothness_scale(mut self, smoothness_scale: f64) -> Self {
        self.graph.smoothness_scale = smoothness_scale;
        self
    }

    /// Sets the default graph stroke.
    #[must_use]
    pub fn with_graph_stroke(mut self, color: Color, line_width: f64) -> Self {
        self.graph.stroke_color = color;
        self.graph.line_width = line_width;
        self
    }

    /// Selects percent or raw sample-index addressing for point markers.
    #[must_use]
    pub fn with_percent_points(mut self, do_percent: bool) -> Self {
        self.point.do_percent = do_percent;
        self
    }
}
