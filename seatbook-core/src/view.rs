use seatbook_shared::SeatId;

/// Presentation layer the seat tracker reads from and writes to.
///
/// The tracker never owns the page; it only asks the view to read seat ids
/// and to flip the two visual states it cares about.
pub trait BookingView {
    /// Handle to one seat element
    type Seat;

    /// Every seat element on the page, in page order
    fn seats(&self) -> Vec<Self::Seat>;

    /// Raw seat id attribute, `None` when the element carries none
    fn seat_id(&self, seat: &Self::Seat) -> Option<String>;

    /// Whether the seat can be picked (reserved seats cannot)
    fn seat_available(&self, _seat: &Self::Seat) -> bool {
        true
    }

    /// Whether the seat currently carries the selected mark
    fn seat_marked(&self, seat: &Self::Seat) -> bool;

    /// All seat elements whose id resolves to `seat_id`. Markup may repeat an
    /// id, so there can be more than one.
    fn seats_with_id(&self, seat_id: &SeatId) -> Vec<Self::Seat> {
        self.seats()
            .into_iter()
            .filter(|seat| {
                self.seat_id(seat)
                    .and_then(|raw| SeatId::parse(&raw).ok())
                    .is_some_and(|id| &id == seat_id)
            })
            .collect()
    }

    fn set_seat_selected(&mut self, seat: &Self::Seat, selected: bool);

    fn set_submit_enabled(&mut self, enabled: bool);
}
