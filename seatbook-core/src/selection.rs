use seatbook_shared::{join_seat_ids, SeatId};

/// Set of seat ids the user currently has selected.
///
/// Iterates in selection order; a seat that is dropped and picked again
/// moves to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<SeatId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    pub fn contains(&self, seat_id: &SeatId) -> bool {
        self.selected.contains(seat_id)
    }

    /// Add a seat; false if it was already selected
    pub fn insert(&mut self, seat_id: SeatId) -> bool {
        if self.contains(&seat_id) {
            return false;
        }
        self.selected.push(seat_id);
        true
    }

    /// Remove a seat; false if it was not selected
    pub fn remove(&mut self, seat_id: &SeatId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| id != seat_id);
        before != self.selected.len()
    }

    /// Flip membership and return whether the seat is now selected
    pub fn toggle(&mut self, seat_id: SeatId) -> bool {
        if self.remove(&seat_id) {
            false
        } else {
            self.selected.push(seat_id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatId> {
        self.selected.iter()
    }

    /// Empty the set, handing back what was selected
    pub fn drain(&mut self) -> Vec<SeatId> {
        std::mem::take(&mut self.selected)
    }

    /// Value for the `seat_ids` form field
    pub fn to_field_value(&self) -> String {
        join_seat_ids(&self.selected)
    }
}
