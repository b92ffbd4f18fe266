use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::Plotter;
use crate::config::PlotterConfig;
use crate::error::PlotResult;
use crate::render::CairoSurface;

/// `DrawingArea` wrapper that re-plots on every GTK draw.
///
/// Each draw binds a fresh plotter to the widget's Cairo context, so geometry
/// always follows the current allocation.
pub struct GtkPlotArea {
    area: gtk::DrawingArea,
    config: Rc<RefCell<PlotterConfig>>,
}

impl GtkPlotArea {
    #[must_use]
    pub fn new<F>(config: PlotterConfig, draw: F) -> Self
    where
        F: Fn(&mut Plotter<'_, CairoSurface>) -> PlotResult<()> + 'static,
    {
        let area = gtk::DrawingArea::new();
        let config = Rc::new(RefCell::new(config));

        let draw_config = Rc::clone(&config);
        area.set_draw_func(move |_area, context, width, height| {
            let mut surface = CairoSurface::for_context(
                context.clone(),
                width.unsigned_abs(),
                height.unsigned_abs(),
            );
            let mut plotter = Plotter::new(&mut surface, draw_config.borrow().clone());
            if let Err(err) = draw(&mut plotter) {
                warn!(error = %err, "plot draw callback failed");
            }
        });

        Self { area, config }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Swaps the configuration and schedules a redraw.
    pub fn set_config(&self, config: PlotterConfig) {
        *self.config.borrow_mut() = config;
        self.area.queue_draw();
    }
}
