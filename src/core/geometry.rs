use serde::{Deserialize, Serialize};

use crate::config::PlotterConfig;
use crate::core::{PixelPoint, Viewport};
use crate::error::{PlotError, PlotResult};

/// Pixel-space values derived from the surface size and configuration.
///
/// Sample indices are in units of `graph.smoothness_scale` pixels, measured
/// from the origin column `x0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub x0: f64,
    pub y0: f64,
    /// Leftmost drawable column of the horizontal axis.
    pub x_min: f64,
    pub plotting_min: i64,
    pub plotting_max: i64,
}

impl PlotGeometry {
    /// Derives the origin and sample bounds. Pure in its inputs.
    #[must_use]
    pub fn derive(viewport: Viewport, config: &PlotterConfig) -> Self {
        let width = viewport.width_px();
        let height = viewport.height_px();
        let axes = &config.axes;
        let step = config.graph.smoothness_scale;

        let x0 = axes.x_offset + 0.5 * width;
        let y0 = axes.y_offset + 0.5 * height;
        let x_min = if axes.show_negative_x { 0.0 } else { x0 };
        let plotting_max = round_half_up((width - x0) / step);
        let plotting_min = if axes.show_negative_x {
            round_half_up(-x0 / step)
        } else {
            0
        };

        Self {
            x0,
            y0,
            x_min,
            plotting_min,
            plotting_max,
        }
    }

    /// Span used for percent addressing; always twice the positive bound.
    #[must_use]
    pub fn plotting_width(self) -> i64 {
        self.plotting_max.saturating_mul(2)
    }

    /// Number of samples drawn for one graph.
    #[must_use]
    pub fn sample_count(self) -> usize {
        if self.plotting_max < self.plotting_min {
            return 0;
        }
        usize::try_from(self.plotting_max - self.plotting_min)
            .map_or(usize::MAX, |span| span.saturating_add(1))
    }

    /// Maps a percent of the plotting width onto a sample index.
    ///
    /// 50% is the origin. 0% and 100% are half the plotting width on either
    /// side of it.
    pub fn x_index_from_percent(self, percent: f64) -> PlotResult<i64> {
        let plotting_width = self.plotting_width() as f64;
        if (0.0..=50.0).contains(&percent) {
            let half_axis_percent = 50.0 - percent;
            Ok(-((plotting_width * (half_axis_percent / 100.0)).floor() as i64))
        } else if percent > 50.0 && percent <= 100.0 {
            let half_axis_percent = percent - 50.0;
            Ok((plotting_width * (half_axis_percent / 100.0)).floor() as i64)
        } else {
            Err(PlotError::InvalidPercent(percent))
        }
    }

    /// Projects one sample of `function` into pixel space.
    ///
    /// The pixel offset is `step * index`; the function sees that offset
    /// divided by `scale`, and its output is scaled back and flipped so larger
    /// values go up.
    pub fn project_sample<F>(self, function: &F, index: f64, step: f64, scale: f64) -> PixelPoint
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let x = step * index;
        let y = scale * function(x / scale);
        PixelPoint::new(self.x0 + x, self.y0 - y)
    }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
