use crate::config::PlotterConfig;
use crate::core::{PlotGeometry, Viewport};

/// Pixel positions of axis tick marks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickLayout {
    /// Columns carrying an x tick.
    pub x_columns: Vec<i64>,
    /// Rows carrying a y tick.
    pub y_rows: Vec<i64>,
}

impl TickLayout {
    /// Computes tick positions for the enabled tick sets.
    ///
    /// A tick sits on every scanned pixel whose position is a multiple of
    /// `ceil(span / interval)`. A zero interval, or a span that leaves no room,
    /// yields no ticks for that axis.
    #[must_use]
    pub fn compute(viewport: Viewport, geometry: PlotGeometry, config: &PlotterConfig) -> Self {
        let width = viewport.width_px();
        let height = viewport.height_px();
        let axes = &config.axes;
        let markings = &axes.markings;

        let x_columns = if markings.show_x {
            let (start, end) = if axes.show_negative_x {
                (0, (width - geometry.x_min).ceil() as i64)
            } else {
                (geometry.x_min.ceil().max(0.0) as i64, i64::from(viewport.width))
            };
            tick_divisor(width - geometry.x_min, markings.x_interval)
                .map(|divisor| tick_positions(start, end, divisor))
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let y_rows = if markings.show_y {
            let end = if axes.show_negative_y {
                i64::from(viewport.height)
            } else {
                (height / 2.0).ceil() as i64
            };
            tick_divisor(height, markings.y_interval)
                .map(|divisor| tick_positions(0, end, divisor))
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        Self { x_columns, y_rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_columns.len() + self.y_rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_columns.is_empty() && self.y_rows.is_empty()
    }
}

/// Pixel spacing between ticks, or `None` when it would be zero or undefined.
#[must_use]
pub fn tick_divisor(span: f64, interval: f64) -> Option<i64> {
    if !(interval.is_finite() && interval > 0.0) || !span.is_finite() {
        return None;
    }
    let divisor = (span / interval).ceil();
    (divisor >= 1.0).then_some(divisor as i64)
}

fn tick_positions(start: i64, end: i64, divisor: i64) -> Vec<i64> {
    (start..=end).filter(|pixel| pixel % divisor == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::{TickLayout, tick_divisor};
    use crate::config::PlotterConfig;
    use crate::core::{PlotGeometry, Viewport};

    #[test]
    fn divisor_guards_degenerate_intervals() {
        assert_eq!(tick_divisor(400.0, 0.0), None);
        assert_eq!(tick_divisor(400.0, -3.0), None);
        assert_eq!(tick_divisor(0.0, 10.0), None);
        assert_eq!(tick_divisor(-20.0, 10.0), None);
        assert_eq!(tick_divisor(f64::NAN, 10.0), None);
        assert_eq!(tick_divisor(400.0, 10.0), Some(40));
        assert_eq!(tick_divisor(401.0, 10.0), Some(41));
        assert_eq!(tick_divisor(400.0, 2.5), Some(160));
    }

    #[test]
    fn default_layout_spans_the_surface() {
        let viewport = Viewport::new(400, 300);
        let config = PlotterConfig::default();
        let geometry = PlotGeometry::derive(viewport, &config);
        let ticks = TickLayout::compute(viewport, geometry, &config);

        assert_eq!(ticks.x_columns.first(), Some(&0));
        assert_eq!(ticks.x_columns.last(), Some(&400));
        assert_eq!(ticks.x_columns.len(), 11);
        assert_eq!(ticks.y_rows, vec![0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300]);
    }

    #[test]
    fn hidden_negative_ranges_scan_half_the_surface() {
        let viewport = Viewport::new(400, 300);
        let config = PlotterConfig::default().with_negative_ranges(false, false);
        let geometry = PlotGeometry::derive(viewport, &config);
        let ticks = TickLayout::compute(viewport, geometry, &config);

        assert_eq!(ticks.x_columns, vec![200, 220, 240, 260, 280, 300, 320, 340, 360, 380, 400]);
        assert_eq!(ticks.y_rows, vec![0, 30, 60, 90, 120, 150]);
    }

    #[test]
    fn zero_interval_disables_only_that_axis() {
        let viewport = Viewport::new(400, 300);
        let config = PlotterConfig::default().with_tick_intervals(0.0, 10.0);
        let geometry = PlotGeometry::derive(viewport, &config);
        let ticks = TickLayout::compute(viewport, geometry, &config);

        assert!(ticks.x_columns.is_empty());
        assert_eq!(ticks.y_rows.len(), 11);
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn x_scan_starts_at_the_left_edge_when_origin_is_far_left() {
        let viewport = Viewport::new(400, 300);
        let config = PlotterConfig::default()
            .with_negative_ranges(false, true)
            .with_origin_offset(-1e12, 0.0);
        let geometry = PlotGeometry::derive(viewport, &config);
        let ticks = TickLayout::compute(viewport, geometry, &config);

        assert!(ticks.x_columns.iter().all(|column| (0..=400).contains(column)));
        assert!(ticks.x_columns.len() <= 401);
    }
}
