use std::f64::consts::TAU;

use fngraph::config::PlotterConfig;
use fngraph::core::PixelPoint;
use fngraph::error::PlotError;
use fngraph::render::{Color, RecordingSurface, SurfaceCommand};
use fngraph::Plotter;

#[test]
fn percent_addressing_maps_onto_sample_indices() {
    let mut surface = RecordingSurface::new(400, 300);
    let plotter = Plotter::new(&mut surface, PlotterConfig::default());

    assert_eq!(plotter.x_index_from_percent(50.0).expect("50"), 0);
    assert_eq!(plotter.x_index_from_percent(0.0).expect("0"), -50);
    assert_eq!(plotter.x_index_from_percent(100.0).expect("100"), 50);
    assert!(matches!(
        plotter.x_index_from_percent(-1.0),
        Err(PlotError::InvalidPercent(value)) if value == -1.0
    ));
    assert!(matches!(
        plotter.x_index_from_percent(101.0),
        Err(PlotError::InvalidPercent(_))
    ));
}

#[test]
fn marker_is_stroked_then_filled() {
    let mut surface = RecordingSurface::new(400, 300);
    let position = Plotter::new(&mut surface, PlotterConfig::default())
        .draw_plotted_value(|x| x, 75.0)
        .expect("draw point");
    assert_eq!(position, PixelPoint::new(300.0, 50.0));

    let defaults = PlotterConfig::default().point;
    assert_eq!(
        surface.commands(),
        &[
            SurfaceCommand::BeginPath,
            SurfaceCommand::Arc {
                x: 300.0,
                y: 50.0,
                radius: 3.0,
                start_angle: 0.0,
                end_angle: TAU,
            },
            SurfaceCommand::SetStrokeColor(defaults.stroke_color),
            SurfaceCommand::SetLineWidth(11.0),
            SurfaceCommand::Stroke,
            SurfaceCommand::SetFillColor(Color::BLACK),
            SurfaceCommand::Fill,
        ]
    );
    assert_eq!(surface.strokes()[0].color, defaults.stroke_color);
    assert_eq!(surface.fills()[0].color, defaults.fill_color);
}

#[test]
fn midpoint_percent_draws_at_origin_value() {
    let mut surface = RecordingSurface::new(400, 300);
    let position = Plotter::new(&mut surface, PlotterConfig::default())
        .draw_plotted_value(|x| x + 1.0, 50.0)
        .expect("draw point");
    assert_eq!(position, PixelPoint::new(200.0, 110.0));
    assert_eq!(surface.fills().len(), 1);
}

#[test]
fn invalid_percent_skips_the_draw() {
    let mut surface = RecordingSurface::new(400, 300);
    let result = Plotter::new(&mut surface, PlotterConfig::default())
        .draw_plotted_value(|x| x, 150.0);

    assert!(matches!(result, Err(PlotError::InvalidPercent(_))));
    assert!(surface.commands().is_empty());
}

#[test]
fn raw_addressing_uses_sample_index() {
    let mut surface = RecordingSurface::new(400, 300);
    let mut plotter = Plotter::new(
        &mut surface,
        PlotterConfig::default().with_percent_points(false),
    );

    assert_eq!(plotter.resolve_point_index(150.0).expect("raw index"), 150.0);
    let position = plotter
        .draw_plotted_value(|x| x * x, 10.0)
        .expect("draw point");
    assert_eq!(position, PixelPoint::new(240.0, 110.0));

    let position = plotter
        .locate_plotted_value(&|x: f64| x * x, -10.0)
        .expect("locate point");
    assert_eq!(position, PixelPoint::new(160.0, 110.0));
}
