use serde::{Deserialize, Serialize};
use crate::sidebar::SidebarView;
use crate::view::BookingView;

/// One seat element of a [`MemoryPage`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySeat {
    pub id: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub selected: bool,
}

fn default_available() -> bool {
    true
}

impl MemorySeat {
    pub fn available(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            available: true,
            selected: false,
        }
    }

    pub fn reserved(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            available: false,
            selected: false,
        }
    }

    pub fn without_id() -> Self {
        Self {
            id: None,
            available: true,
            selected: false,
        }
    }
}

/// Headless booking page: seats addressed by index plus a submit button.
///
/// The button starts enabled, like markup that forgot the `disabled`
/// attribute; the tracker has to establish the real state on page ready.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    seats: Vec<MemorySeat>,
    submit_enabled: bool,
}

impl MemoryPage {
    pub fn new(seats: Vec<MemorySeat>) -> Self {
        Self {
            seats,
            submit_enabled: true,
        }
    }

    pub fn seat(&self, index: usize) -> Option<&MemorySeat> {
        self.seats.get(index)
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Ids of the seats currently marked selected, in page order
    pub fn selected_ids(&self) -> Vec<String> {
        self.seats
            .iter()
            .filter(|seat| seat.selected)
            .filter_map(|seat| seat.id.clone())
            .collect()
    }
}

impl BookingView for MemoryPage {
    type Seat = usize;

    fn seats(&self) -> Vec<usize> {
        (0..self.seats.len()).collect()
    }

    fn seat_id(&self, seat: &usize) -> Option<String> {
        self.seats.get(*seat).and_then(|seat| seat.id.clone())
    }

    fn seat_available(&self, seat: &usize) -> bool {
        self.seats.get(*seat).map(|seat| seat.available).unwrap_or(false)
    }

    fn seat_marked(&self, seat: &usize) -> bool {
        self.seats.get(*seat).is_some_and(|seat| seat.selected)
    }

    fn set_seat_selected(&mut self, seat: &usize, selected: bool) {
        if let Some(seat) = self.seats.get_mut(*seat) {
            seat.selected = selected;
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

/// Headless sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySidebar {
    pub open: bool,
}

impl SidebarView for MemorySidebar {
    fn set_sidebar_open(&mut self, open: bool) {
        self.open = open;
    }
}
