//! GTK4 embedding: a `DrawingArea` that renders the engine through Cairo and
//! feeds `GestureDrag` events into the drag controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{DEFERRED_MEASURE_DELAY_SECONDS, NumberLineEngine};
use crate::core::Viewport;
use crate::interaction::{PointerId, PointerSample};
use crate::render::{CairoContextRenderer, Renderer};

/// GTK gesture drags carry a single pointer.
const GESTURE_POINTER: PointerId = 0;

pub type SharedEngine<R> = Rc<RefCell<NumberLineEngine<R>>>;

pub struct GtkNumberLineAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkNumberLineAdapter<R> {
    /// Wraps the engine in a new drawing area and wires draw, resize, drag
    /// and teardown handlers.
    #[must_use]
    pub fn new(engine: NumberLineEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        attach_draw(&drawing_area, Rc::clone(&engine));
        attach_measurement(&drawing_area, Rc::clone(&engine));
        attach_drag(&drawing_area, Rc::clone(&engine));

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }
}

fn widget_extent(area: &gtk::DrawingArea) -> Viewport {
    Viewport::new(
        u32::try_from(area.width()).unwrap_or(0),
        u32::try_from(area.height()).unwrap_or(0),
    )
}

fn attach_draw<R: Renderer + CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    engine: SharedEngine<R>,
) {
    drawing_area.set_draw_func(move |_widget, context, _width, _height| {
        let Ok(mut number_line) = engine.try_borrow_mut() else {
            return;
        };
        if let Err(err) = number_line.render_on_cairo_context(context) {
            warn!(error = %err, "number line draw failed");
        }
    });
}

fn attach_measurement<R: Renderer + CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    engine: SharedEngine<R>,
) {
    {
        let engine = Rc::clone(&engine);
        drawing_area.connect_realize(move |area| {
            let mut measure = {
                let area = area.clone();
                move || widget_extent(&area)
            };
            if let Ok(mut number_line) = engine.try_borrow_mut() {
                number_line.mount(&mut measure);
            }

            let engine = Rc::clone(&engine);
            let area = area.clone();
            gtk::glib::timeout_add_local_once(
                Duration::from_secs_f64(DEFERRED_MEASURE_DELAY_SECONDS),
                move || {
                    let Ok(mut number_line) = engine.try_borrow_mut() else {
                        return;
                    };
                    match number_line
                        .step_deferred_measure(DEFERRED_MEASURE_DELAY_SECONDS, &mut measure)
                    {
                        Ok(true) => area.queue_draw(),
                        Ok(false) => {}
                        Err(err) => warn!(error = %err, "deferred re-measure failed"),
                    }
                },
            );
        });
    }
    {
        let engine = Rc::clone(&engine);
        drawing_area.connect_resize(move |area, _width, _height| {
            if let Ok(mut number_line) = engine.try_borrow_mut() {
                let mut measure = || widget_extent(area);
                number_line.resize(&mut measure);
            }
        });
    }
    drawing_area.connect_unrealize(move |_| {
        if let Ok(mut number_line) = engine.try_borrow_mut() {
            number_line.teardown();
        }
    });
}

fn attach_drag<R: Renderer + CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    engine: SharedEngine<R>,
) {
    let drag = gtk::GestureDrag::new();
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_begin(move |_, x, y| {
            if let Ok(mut number_line) = engine.try_borrow_mut() {
                number_line.pointer_down_at(GESTURE_POINTER, PointerSample::new(x, y));
            }
            drawing_area.queue_draw();
        });
    }
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let Ok(mut number_line) = engine.try_borrow_mut() else {
                return;
            };
            let sample = PointerSample::new(start_x + offset_x, start_y + offset_y);
            if !number_line.pointer_move(GESTURE_POINTER, sample).is_empty() {
                drawing_area.queue_draw();
            }
        });
    }
    {
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |_, _, _| {
            if let Ok(mut number_line) = engine.try_borrow_mut() {
                number_line.pointer_up(GESTURE_POINTER);
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(drag);
}
