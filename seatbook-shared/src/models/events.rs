use serde::{Deserialize, Serialize};
use crate::seat::SeatId;

/// Everything the seat tracker and sidebar report to their observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    SeatSelected {
        seat_id: SeatId,
        selected_count: usize,
    },
    SeatDeselected {
        seat_id: SeatId,
        selected_count: usize,
    },
    SeatUnavailable {
        seat_id: SeatId,
    },
    SubmitControlChanged {
        enabled: bool,
    },
    PayloadSerialized {
        field: String,
        value: String,
        seat_count: usize,
    },
    SelectionCleared {
        released: usize,
    },
    ContractViolation {
        reason: String,
    },
    SidebarToggled {
        open: bool,
    },
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::SeatSelected { .. } => "seat_selected",
            SelectionEvent::SeatDeselected { .. } => "seat_deselected",
            SelectionEvent::SeatUnavailable { .. } => "seat_unavailable",
            SelectionEvent::SubmitControlChanged { .. } => "submit_control_changed",
            SelectionEvent::PayloadSerialized { .. } => "payload_serialized",
            SelectionEvent::SelectionCleared { .. } => "selection_cleared",
            SelectionEvent::ContractViolation { .. } => "contract_violation",
            SelectionEvent::SidebarToggled { .. } => "sidebar_toggled",
        }
    }
}
