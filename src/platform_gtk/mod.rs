use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::MultiLineChart;
use crate::core::Point;
use crate::interaction::HapticFeedback;
use crate::render::{CairoContextRenderer, Renderer};
use crate::style::ColorScheme;

type SharedChart<R, H> = Rc<RefCell<MultiLineChart<R, H>>>;

/// Hosts a [`MultiLineChart`] in a GTK4 `DrawingArea`.
///
/// A `GestureDrag` feeds drag begin/update/end into the chart's selection
/// state and requests a redraw after each event. The color scheme is read from
/// the GTK settings on every draw and handed to the chart explicitly.
pub struct GtkChartAdapter<R, H>
where
    R: Renderer + CairoContextRenderer + 'static,
    H: HapticFeedback + 'static,
{
    chart: SharedChart<R, H>,
    area: gtk::DrawingArea,
}

impl<R, H> GtkChartAdapter<R, H>
where
    R: Renderer + CairoContextRenderer + 'static,
    H: HapticFeedback + 'static,
{
    #[must_use]
    pub fn new(chart: MultiLineChart<R, H>) -> Self {
        let form = chart.config().form;
        let chart = Rc::new(RefCell::new(chart));
        let area = gtk::DrawingArea::builder()
            .content_width(form.width.ceil() as i32)
            .content_height(form.height.ceil() as i32)
            .build();

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, _width, _height| {
            let scheme = current_color_scheme();
            if let Err(err) = draw_chart
                .borrow_mut()
                .render_on_cairo_context(context, scheme)
            {
                warn!(error = %err, "failed to draw multi-line chart");
            }
        });

        let drag = gtk::GestureDrag::new();

        let begin_chart = Rc::clone(&chart);
        let begin_area = area.downgrade();
        drag.connect_drag_begin(move |_gesture, x, y| {
            begin_chart.borrow_mut().drag_changed(Point::new(x, y));
            if let Some(area) = begin_area.upgrade() {
                area.queue_draw();
            }
        });

        let update_chart = Rc::clone(&chart);
        let update_area = area.downgrade();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            update_chart
                .borrow_mut()
                .drag_changed(Point::new(start_x + offset_x, start_y + offset_y));
            if let Some(area) = update_area.upgrade() {
                area.queue_draw();
            }
        });

        let end_chart = Rc::clone(&chart);
        let end_area = area.downgrade();
        drag.connect_drag_end(move |_gesture, _offset_x, _offset_y| {
            end_chart.borrow_mut().drag_ended();
            if let Some(area) = end_area.upgrade() {
                area.queue_draw();
            }
        });

        area.add_controller(drag);
        Self { chart, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart<R, H> {
        Rc::clone(&self.chart)
    }
}

fn current_color_scheme() -> ColorScheme {
    match gtk::Settings::default() {
        Some(settings) if settings.is_gtk_application_prefer_dark_theme() => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}
