use std::cell::RefCell;
use std::rc::Rc;
use seatbook_core::{BookingView, SeatSelectionTracker, SidebarConfig, SidebarToggle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::dom::{DomBookingView, DomSidebarView};
use crate::form::DomForm;
use crate::{parse_page_config, PageConfig};

thread_local! {
    static SIDEBAR: RefCell<Option<SidebarToggle<DomSidebarView>>> = RefCell::new(None);
}

fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.document().ok_or_else(|| JsValue::from_str("no document"))
}

/// Wire the booking page. Waits for `DOMContentLoaded` when the document is
/// still loading, so the initial submit state never depends on script order.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let config = parse_page_config(config_json.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = document()?;

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();
    if ready_state != "loading" {
        return attach(&document, &config);
    }

    let deferred = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = attach(&deferred, &config) {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// Open or close the sidebar; returns the new state
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() -> bool {
    SIDEBAR.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .map(|sidebar| sidebar.toggle())
            .unwrap_or(false)
    })
}

fn attach(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let tracker_config = config.tracker.clone();
    let view = DomBookingView::new(document.clone(), tracker_config.clone());
    let seats = view.seats();
    let tracker = Rc::new(RefCell::new(SeatSelectionTracker::new(view, tracker_config.clone())));
    tracker.borrow_mut().page_ready();

    for seat in &seats {
        let tracker = Rc::clone(&tracker);
        let target = seat.clone();
        let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
            if let Err(err) = tracker.borrow_mut().toggle(&target) {
                web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
            }
        }));
        seat.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let form = document
        .get_element_by_id(&tracker_config.form_id)
        .ok_or_else(|| JsValue::from_str("booking form not found"))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| JsValue::from_str("booking form is not a <form>"))?;
    let mut dom_form = DomForm::new(document.clone(), form.clone());
    let on_submit = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        if let Err(err) = tracker.borrow_mut().submit(&mut dom_form) {
            // Never send a booking without its seats
            event.prevent_default();
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
        }
    }));
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    attach_sidebar(document, &config.sidebar)?;
    tracing::info!("Booking page mounted with {} seats", seats.len());
    Ok(())
}

fn attach_sidebar(document: &Document, config: &SidebarConfig) -> Result<(), JsValue> {
    let sidebar = document.query_selector(&config.sidebar_selector)?;
    let button = document.query_selector(&config.toggle_selector)?;
    let view = DomSidebarView::new(sidebar, button.clone(), config.clone());
    SIDEBAR.with(|slot| *slot.borrow_mut() = Some(SidebarToggle::new(view)));

    if let Some(button) = button {
        let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
            toggle_sidebar();
        }));
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
