use std::cell::RefCell;
use std::rc::Rc;
use seatbook_shared::SelectionEvent;
use tracing::{debug, info, warn};

/// Injectable diagnostics hook for the tracker and sidebar
pub trait SelectionObserver {
    fn on_event(&mut self, event: &SelectionEvent);
}

/// Forwards events to `tracing` under the `seatbook` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_event(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::SeatSelected { seat_id, selected_count } => {
                debug!(target: "seatbook", %seat_id, selected_count, "Seat selected");
            }
            SelectionEvent::SeatDeselected { seat_id, selected_count } => {
                debug!(target: "seatbook", %seat_id, selected_count, "Seat deselected");
            }
            SelectionEvent::SeatUnavailable { seat_id } => {
                debug!(target: "seatbook", "Ignoring click on unavailable seat {}", seat_id);
            }
            SelectionEvent::SubmitControlChanged { enabled } => {
                debug!(target: "seatbook", "Submit control enabled: {}", enabled);
            }
            SelectionEvent::PayloadSerialized { field, value, seat_count } => {
                info!(target: "seatbook", "Attached {}={:?} ({} seats)", field, value, seat_count);
            }
            SelectionEvent::SelectionCleared { released } => {
                debug!(target: "seatbook", "Selection cleared, released {} seats", released);
            }
            SelectionEvent::ContractViolation { reason } => {
                warn!(target: "seatbook", "Seat tracker contract violation: {}", reason);
            }
            SelectionEvent::SidebarToggled { open } => {
                debug!(target: "seatbook", "Sidebar open: {}", open);
            }
        }
    }
}

/// Keeps every event in memory. Clones share one buffer, so a tracker and
/// a sidebar can record into the same ordered log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<SelectionEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SelectionEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.name() == name)
            .count()
    }
}

impl SelectionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SelectionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl SelectionObserver for () {
    fn on_event(&mut self, _event: &SelectionEvent) {}
}

impl<A: SelectionObserver, B: SelectionObserver> SelectionObserver for (A, B) {
    fn on_event(&mut self, event: &SelectionEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}
