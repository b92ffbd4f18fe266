use tracing::warn;

use crate::error::PlotError;
use crate::render::Color;

use super::PlotterConfig;

/// Replaces unusable leaves of `config` with the matching leaf of `fallback`.
///
/// Each replacement is logged; resolution never fails on a bad value.
pub(crate) fn sanitize(mut config: PlotterConfig, fallback: &PlotterConfig) -> PlotterConfig {
    let axes = &mut config.axes;
    keep_finite(&mut axes.x_offset, fallback.axes.x_offset, "axes.x_offset");
    keep_finite(&mut axes.y_offset, fallback.axes.y_offset, "axes.y_offset");
    keep_positive(&mut axes.scale, fallback.axes.scale, "axes.scale");
    keep_positive(&mut axes.line_width, fallback.axes.line_width, "axes.line_width");
    keep_color(&mut axes.stroke_color, fallback.axes.stroke_color, "axes.stroke_color");

    let markings = &mut axes.markings;
    keep_non_negative(
        &mut markings.x_interval,
        fallback.axes.markings.x_interval,
        "axes.markings.x_interval",
    );
    keep_non_negative(
        &mut markings.y_interval,
        fallback.axes.markings.y_interval,
        "axes.markings.y_interval",
    );
    keep_non_negative(
        &mut markings.x_height,
        fallback.axes.markings.x_height,
        "axes.markings.x_height",
    );
    keep_non_negative(
        &mut markings.y_width,
        fallback.axes.markings.y_width,
        "axes.markings.y_width",
    );

    let graph = &mut config.graph;
    keep_positive(&mut graph.line_width, fallback.graph.line_width, "graph.line_width");
    keep_positive(
        &mut graph.smoothness_scale,
        fallback.graph.smoothness_scale,
        "graph.smoothness_scale",
    );
    keep_color(&mut graph.stroke_color, fallback.graph.stroke_color, "graph.stroke_color");

    let point = &mut config.point;
    keep_positive(&mut point.line_width, fallback.point.line_width, "point.line_width");
    keep_non_negative(&mut point.radius, fallback.point.radius, "point.radius");
    keep_color(&mut point.stroke_color, fallback.point.stroke_color, "point.stroke_color");
    keep_color(&mut point.fill_color, fallback.point.fill_color, "point.fill_color");

    config
}

fn keep_finite(value: &mut f64, fallback: f64, field: &str) {
    keep_if(value, fallback, field, f64::is_finite);
}

fn keep_positive(value: &mut f64, fallback: f64, field: &str) {
    keep_if(value, fallback, field, |v| v.is_finite() && v > 0.0);
}

fn keep_non_negative(value: &mut f64, fallback: f64, field: &str) {
    keep_if(value, fallback, field, |v| v.is_finite() && v >= 0.0);
}

fn keep_if(value: &mut f64, fallback: f64, field: &str, is_valid: impl Fn(f64) -> bool) {
    if !is_valid(*value) {
        let err = invalid_value(field);
        warn!(error = %err, value = *value, fallback, "keeping previous configuration value");
        *value = fallback;
    }
}

fn keep_color(value: &mut Color, fallback: Color, field: &str) {
    if let Err(err) = value.validate() {
        warn!(
            error = %invalid_value(field),
            cause = %err,
            fallback = %fallback,
            "keeping previous configuration color"
        );
        *value = fallback;
    }
}

fn invalid_value(field: &str) -> PlotError {
    PlotError::InvalidConfigValue {
        field: field.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize;
    use crate::config::PlotterConfig;

    #[test]
    fn zero_smoothness_and_negative_scale_fall_back() {
        let broken = PlotterConfig::default()
            .with_smoothness_scale(0.0)
            .with_scale(-2.0);
        let fixed = sanitize(broken, &PlotterConfig::default());
        assert_eq!(fixed.graph.smoothness_scale, 4.0);
        assert_eq!(fixed.axes.scale, 40.0);
    }

    #[test]
    fn fallback_is_the_previous_config_not_the_defaults() {
        let previous = PlotterConfig::default().with_scale(25.0);
        let fixed = sanitize(PlotterConfig::default().with_scale(f64::NAN), &previous);
        assert_eq!(fixed.axes.scale, 25.0);
    }

    #[test]
    fn negative_tick_interval_keeps_previous_count() {
        let previous = PlotterConfig::default().with_tick_intervals(6.0, 8.0);
        let fixed = sanitize(
            PlotterConfig::default().with_tick_intervals(-3.0, 0.0),
            &previous,
        );
        assert_eq!(fixed.axes.markings.x_interval, 6.0);
        assert_eq!(fixed.axes.markings.y_interval, 0.0);
    }

    #[test]
    fn valid_config_is_untouched() {
        let config = PlotterConfig::default().with_origin_offset(-12.0, 30.0);
        assert_eq!(sanitize(config.clone(), &PlotterConfig::default()), config);
    }
}
