use seatbook_core::{BookingView, SidebarConfig, SidebarView, TrackerConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Report a failed DOM write on the console
fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        web_sys::console::warn_2(&JsValue::from_str(what), &err);
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if class.is_empty() {
        return;
    }
    warn_on_err(
        element.class_list().toggle_with_force(class, on),
        &format!("Failed to set class {}", class),
    );
}

/// Booking page as seen through the DOM
pub struct DomBookingView {
    document: Document,
    config: TrackerConfig,
}

impl DomBookingView {
    pub fn new(document: Document, config: TrackerConfig) -> Self {
        Self { document, config }
    }
}

impl BookingView for DomBookingView {
    type Seat = Element;

    /// Every element matching the seat selector, in document order
    fn seats(&self) -> Vec<Element> {
        let mut seats = Vec::new();
        if let Ok(list) = self.document.query_selector_all(&self.config.seat_selector) {
            for index in 0..list.length() {
                let seat = list.item(index).and_then(|node| node.dyn_into::<Element>().ok());
                if let Some(seat) = seat {
                    seats.push(seat);
                }
            }
        }
        seats
    }

    fn seat_id(&self, seat: &Element) -> Option<String> {
        seat.get_attribute(&self.config.seat_id_attribute)
    }

    fn seat_available(&self, seat: &Element) -> bool {
        self.config.unavailable_class.is_empty()
            || !seat.class_list().contains(&self.config.unavailable_class)
    }

    fn seat_marked(&self, seat: &Element) -> bool {
        !self.config.selected_class.is_empty()
            && seat.class_list().contains(&self.config.selected_class)
    }

    fn set_seat_selected(&mut self, seat: &Element, selected: bool) {
        set_class(seat, &self.config.selected_class, selected);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        let Some(button) = self.document.get_element_by_id(&self.config.submit_button_id) else {
            return;
        };
        set_class(&button, &self.config.disabled_class, !enabled);
        let result = if enabled {
            button.remove_attribute("disabled")
        } else {
            button.set_attribute("disabled", "")
        };
        warn_on_err(result, "Failed to update the submit button");
    }
}

/// Sidebar panel plus its toggle button; either may be absent from the page
pub struct DomSidebarView {
    sidebar: Option<Element>,
    button: Option<Element>,
    config: SidebarConfig,
}

impl DomSidebarView {
    pub fn new(sidebar: Option<Element>, button: Option<Element>, config: SidebarConfig) -> Self {
        Self { sidebar, button, config }
    }
}

impl SidebarView for DomSidebarView {
    fn set_sidebar_open(&mut self, open: bool) {
        if let Some(sidebar) = &self.sidebar {
            set_class(sidebar, &self.config.open_class, open);
        }
        if let Some(button) = &self.button {
            set_class(button, &self.config.opened_class, open);
            let label = if open {
                self.config.open_label.as_str()
            } else {
                self.config.closed_label.as_str()
            };
            button.set_text_content(Some(label));
        }
    }
}
