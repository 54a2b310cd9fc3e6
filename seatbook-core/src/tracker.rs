use seatbook_shared::{SeatId, SelectionEvent, SubmissionPayload};
use crate::config::TrackerConfig;
use crate::form::SubmissionForm;
use crate::observer::{SelectionObserver, TracingObserver};
use crate::selection::SelectionState;
use crate::view::BookingView;
use crate::{CoreError, CoreResult};

/// Outcome of one click on a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Deselected,
    /// Seat cannot be picked; nothing changed
    Unavailable,
}

/// Keeps the selected seats, the seat elements and the submit control in
/// lockstep, and attaches the selection to the booking form on submit.
///
/// One instance per page load. Every method runs to completion inside a
/// single UI event.
pub struct SeatSelectionTracker<V: BookingView, O: SelectionObserver = TracingObserver> {
    view: V,
    observer: O,
    config: TrackerConfig,
    state: SelectionState,
    submit_enabled: Option<bool>,
}

impl<V: BookingView> SeatSelectionTracker<V, TracingObserver> {
    pub fn new(view: V, config: TrackerConfig) -> Self {
        Self::with_observer(view, TracingObserver, config)
    }
}

impl<V: BookingView, O: SelectionObserver> SeatSelectionTracker<V, O> {
    pub fn with_observer(view: V, observer: O, config: TrackerConfig) -> Self {
        Self {
            view,
            observer,
            config,
            state: SelectionState::new(),
            submit_enabled: None,
        }
    }

    /// Establish the selection and the submit control once the page is
    /// ready, regardless of what the markup started with.
    ///
    /// Seats the markup already marks selected are adopted when they carry a
    /// usable id and can be picked; any other mark is cleared. Every element
    /// sharing an adopted id ends up marked.
    pub fn page_ready(&mut self) -> bool {
        for seat in self.view.seats() {
            if !self.view.seat_marked(&seat) {
                continue;
            }
            let raw = self.view.seat_id(&seat);
            match raw.as_deref().map(SeatId::parse) {
                Some(Ok(seat_id)) if self.state.contains(&seat_id) => {}
                Some(Ok(seat_id)) if self.view.seat_available(&seat) => {
                    self.state.insert(seat_id.clone());
                    let selected_count = self.state.len();
                    self.emit(SelectionEvent::SeatSelected { seat_id, selected_count });
                }
                _ => {
                    self.view.set_seat_selected(&seat, false);
                    self.emit(SelectionEvent::ContractViolation {
                        reason: format!(
                            "cleared selected mark on seat {:?}, it cannot be picked",
                            raw.unwrap_or_default()
                        ),
                    });
                }
            }
        }
        let tracked: Vec<SeatId> = self.state.iter().cloned().collect();
        for seat_id in &tracked {
            self.mark_all(seat_id, true);
        }

        self.submit_enabled = None;
        self.refresh_submit_control()
    }

    /// Handle a click on a seat element
    pub fn toggle(&mut self, seat: &V::Seat) -> CoreResult<SeatToggle> {
        let raw = match self.view.seat_id(seat) {
            Some(raw) => raw,
            None => {
                let reason = format!(
                    "seat element has no {} attribute",
                    self.config.seat_id_attribute
                );
                self.emit(SelectionEvent::ContractViolation { reason });
                return Err(CoreError::MissingSeatId);
            }
        };
        let seat_id = match SeatId::parse(&raw) {
            Ok(seat_id) => seat_id,
            Err(err) => {
                self.emit(SelectionEvent::ContractViolation {
                    reason: format!("{:?}: {}", raw, err),
                });
                return Err(err.into());
            }
        };

        // Deselecting is always allowed, even if the seat became unavailable
        if !self.state.contains(&seat_id) && !self.view.seat_available(seat) {
            self.emit(SelectionEvent::SeatUnavailable { seat_id });
            return Ok(SeatToggle::Unavailable);
        }

        let selected = self.state.toggle(seat_id.clone());
        self.view.set_seat_selected(seat, selected);
        self.mark_all(&seat_id, selected);
        let selected_count = self.state.len();
        let outcome = if selected {
            self.emit(SelectionEvent::SeatSelected { seat_id, selected_count });
            SeatToggle::Selected
        } else {
            self.emit(SelectionEvent::SeatDeselected { seat_id, selected_count });
            SeatToggle::Deselected
        };

        self.refresh_submit_control();
        Ok(outcome)
    }

    /// Push the enabled state implied by the selection to the view.
    /// Enabled iff at least one seat is selected.
    pub fn refresh_submit_control(&mut self) -> bool {
        let enabled = !self.state.is_empty();
        self.view.set_submit_enabled(enabled);
        if self.submit_enabled != Some(enabled) {
            self.submit_enabled = Some(enabled);
            self.emit(SelectionEvent::SubmitControlChanged { enabled });
        }
        enabled
    }

    /// Write the selection into the form's seat field. Safe to call any
    /// number of times: the form keeps a single field.
    pub fn serialize_for_submission<F: SubmissionForm>(
        &mut self,
        form: &mut F,
    ) -> CoreResult<SubmissionPayload> {
        let value = self.state.to_field_value();
        form.upsert_field(&self.config.field_name, &value)?;

        let payload = SubmissionPayload {
            field: self.config.field_name.clone(),
            value,
            seat_count: self.state.len(),
        };
        self.emit(SelectionEvent::PayloadSerialized {
            field: payload.field.clone(),
            value: payload.value.clone(),
            seat_count: payload.seat_count,
        });
        Ok(payload)
    }

    /// One submission attempt: attach the selection, then discard it when
    /// `clear_after_submit` is set
    pub fn submit<F: SubmissionForm>(&mut self, form: &mut F) -> CoreResult<SubmissionPayload> {
        let payload = self.serialize_for_submission(form)?;
        if self.config.clear_after_submit {
            self.reset();
        }
        Ok(payload)
    }

    /// Drop every selected seat, unmarking its element
    pub fn reset(&mut self) -> usize {
        let released = self.state.drain();
        for seat_id in &released {
            if self.mark_all(seat_id, false) == 0 {
                self.emit(SelectionEvent::ContractViolation {
                    reason: format!("selected seat {} is no longer on the page", seat_id),
                });
            }
        }
        if !released.is_empty() {
            self.emit(SelectionEvent::SelectionCleared {
                released: released.len(),
            });
        }
        self.refresh_submit_control();
        released.len()
    }

    pub fn selected(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selected(&self, seat_id: &SeatId) -> bool {
        self.state.contains(seat_id)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mark or unmark every element carrying `seat_id`; returns how many
    fn mark_all(&mut self, seat_id: &SeatId, selected: bool) -> usize {
        let seats = self.view.seats_with_id(seat_id);
        for seat in &seats {
            self.view.set_seat_selected(seat, selected);
        }
        seats.len()
    }

    fn emit(&mut self, event: SelectionEvent) {
        self.observer.on_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormFields;
    use crate::memory::{MemoryPage, MemorySeat};
    use crate::observer::RecordingObserver;
    use rand::Rng;

    fn seat(raw: &str) -> SeatId {
        SeatId::parse(raw).unwrap()
    }

    type TestTracker = SeatSelectionTracker<MemoryPage, RecordingObserver>;

    fn tracker_for(seats: Vec<MemorySeat>) -> (TestTracker, RecordingObserver) {
        let recorder = RecordingObserver::new();
        let tracker = SeatSelectionTracker::with_observer(
            MemoryPage::new(seats),
            recorder.clone(),
            TrackerConfig::default(),
        );
        (tracker, recorder)
    }

    fn layout() -> Vec<MemorySeat> {
        vec![
            MemorySeat::available("A1"),
            MemorySeat::available("B2"),
            MemorySeat::available("C3"),
        ]
    }

    fn marked(seat: MemorySeat) -> MemorySeat {
        MemorySeat {
            selected: true,
            ..seat
        }
    }

    /// View marks and tracker set must never diverge: an element is marked
    /// exactly when its id is tracked
    fn assert_in_sync(tracker: &TestTracker) {
        let page = tracker.view();
        for index in page.seats() {
            let tracked = page
                .seat_id(&index)
                .and_then(|raw| SeatId::parse(&raw).ok())
                .is_some_and(|seat_id| tracker.is_selected(&seat_id));
            assert_eq!(page.seat_marked(&index), tracked, "seat {} out of sync", index);
        }
        for seat_id in tracker.selected().iter() {
            assert!(!page.seats_with_id(seat_id).is_empty());
        }
        assert_eq!(page.submit_enabled(), !tracker.selected().is_empty());
    }

    #[test]
    fn test_page_load_disables_submit() {
        let (mut tracker, recorder) = tracker_for(layout());
        // Markup starts with an enabled button
        assert!(tracker.view().submit_enabled());

        assert!(!tracker.page_ready());
        assert!(!tracker.view().submit_enabled());
        assert_eq!(
            recorder.events(),
            vec![SelectionEvent::SubmitControlChanged { enabled: false }]
        );
    }

    #[test]
    fn test_click_and_unclick_seat() {
        let (mut tracker, _recorder) = tracker_for(layout());
        tracker.page_ready();

        assert_eq!(tracker.toggle(&0).unwrap(), SeatToggle::Selected);
        assert!(tracker.is_selected(&seat("A1")));
        assert!(tracker.view().seat(0).unwrap().selected);
        assert!(tracker.view().submit_enabled());

        assert_eq!(tracker.toggle(&0).unwrap(), SeatToggle::Deselected);
        assert!(tracker.selected().is_empty());
        assert!(!tracker.view().seat(0).unwrap().selected);
        assert!(!tracker.view().submit_enabled());
    }

    #[test]
    fn test_submit_two_seats() {
        let (mut tracker, recorder) = tracker_for(layout());
        tracker.page_ready();
        tracker.toggle(&0).unwrap();
        tracker.toggle(&1).unwrap();

        let mut form = FormFields::new();
        let payload = tracker.submit(&mut form).unwrap();
        assert_eq!(payload.field, "seat_ids");
        assert_eq!(payload.value, "A1,B2");
        assert_eq!(payload.seat_count, 2);
        assert_eq!(form.field_values("seat_ids"), vec!["A1,B2".to_string()]);

        // Selection is discarded after the submission
        assert!(tracker.selected().is_empty());
        assert!(!tracker.view().submit_enabled());
        assert!(tracker.view().selected_ids().is_empty());
        assert_eq!(recorder.count("selection_cleared"), 1);
    }

    #[test]
    fn test_serialize_twice_keeps_one_field() {
        let (mut tracker, _recorder) = tracker_for(layout());
        tracker.toggle(&0).unwrap();
        tracker.toggle(&1).unwrap();

        let mut form = FormFields::new();
        let first = tracker.serialize_for_submission(&mut form).unwrap();
        let second = tracker.serialize_for_submission(&mut form).unwrap();

        assert_eq!(first, second);
        assert_eq!(form.count("seat_ids"), 1);
        let ids: Vec<&str> = form.get("seat_ids").unwrap().split(',').collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"A1") && ids.contains(&"B2"));
    }

    #[test]
    fn test_resubmit_without_reload() {
        let (mut tracker, _recorder) = tracker_for(layout());
        tracker.page_ready();
        let mut form = FormFields::new();
        form.append("session_id", "12");

        tracker.toggle(&0).unwrap();
        assert_eq!(tracker.submit(&mut form).unwrap().value, "A1");

        tracker.toggle(&0).unwrap();
        tracker.toggle(&1).unwrap();
        assert_eq!(tracker.submit(&mut form).unwrap().value, "A1,B2");

        assert_eq!(form.field_values("seat_ids"), vec!["A1,B2".to_string()]);
        assert_eq!(form.iter().count(), 2);
    }

    #[test]
    fn test_keep_selection_when_not_clearing() {
        let recorder = RecordingObserver::new();
        let config = TrackerConfig {
            clear_after_submit: false,
            ..TrackerConfig::default()
        };
        let mut tracker =
            SeatSelectionTracker::with_observer(MemoryPage::new(layout()), recorder, config);
        tracker.toggle(&2).unwrap();

        let mut form = FormFields::new();
        tracker.submit(&mut form).unwrap();
        tracker.submit(&mut form).unwrap();
        assert!(tracker.is_selected(&seat("C3")));
        assert_eq!(form.field_values("seat_ids"), vec!["C3".to_string()]);
    }

    #[test]
    fn test_missing_seat_id_is_ignored() {
        let (mut tracker, recorder) =
            tracker_for(vec![MemorySeat::without_id(), MemorySeat::available(" ")]);
        tracker.page_ready();

        assert!(matches!(tracker.toggle(&0), Err(CoreError::MissingSeatId)));
        assert!(matches!(tracker.toggle(&1), Err(CoreError::InvalidSeatId(_))));
        assert!(tracker.selected().is_empty());
        assert!(!tracker.view().submit_enabled());
        assert_eq!(recorder.count("contract_violation"), 2);
    }

    #[test]
    fn test_unavailable_seat_cannot_be_selected() {
        let (mut tracker, recorder) =
            tracker_for(vec![MemorySeat::available("A1"), MemorySeat::reserved("A2")]);
        tracker.page_ready();

        assert_eq!(tracker.toggle(&1).unwrap(), SeatToggle::Unavailable);
        assert!(tracker.selected().is_empty());
        assert!(!tracker.view().seat(1).unwrap().selected);
        assert_eq!(recorder.count("seat_unavailable"), 1);
    }

    #[test]
    fn test_page_ready_adopts_marked_seats() {
        let (mut tracker, recorder) = tracker_for(vec![
            marked(MemorySeat::available("A1")),
            MemorySeat::available("B2"),
            marked(MemorySeat::reserved("C3")),
            marked(MemorySeat::without_id()),
        ]);

        assert!(tracker.page_ready());
        assert_eq!(tracker.selected().to_field_value(), "A1");
        assert!(tracker.view().seat(0).unwrap().selected);
        assert!(!tracker.view().seat(2).unwrap().selected);
        assert!(!tracker.view().seat(3).unwrap().selected);
        assert!(tracker.view().submit_enabled());
        assert_eq!(recorder.count("seat_selected"), 1);
        assert_eq!(recorder.count("contract_violation"), 2);
        assert_in_sync(&tracker);

        let mut form = FormFields::new();
        assert_eq!(tracker.serialize_for_submission(&mut form).unwrap().value, "A1");

        // Clicking the adopted seat releases it like any other
        assert_eq!(tracker.toggle(&0).unwrap(), SeatToggle::Deselected);
        assert!(!tracker.view().submit_enabled());
        assert_in_sync(&tracker);
    }

    #[test]
    fn test_page_ready_marks_every_copy_of_adopted_seat() {
        let (mut tracker, _recorder) = tracker_for(vec![
            MemorySeat::available("A1"),
            marked(MemorySeat::available(" A1 ")),
            marked(MemorySeat::available("A1")),
        ]);

        tracker.page_ready();
        assert_eq!(tracker.selected().len(), 1);
        assert!(tracker.view().seat(0).unwrap().selected);
        assert_in_sync(&tracker);
    }

    #[test]
    fn test_duplicate_seat_ids_toggle_together() {
        let (mut tracker, _recorder) =
            tracker_for(vec![MemorySeat::available("A1"), MemorySeat::available(" A1 ")]);
        tracker.page_ready();

        assert_eq!(tracker.toggle(&0).unwrap(), SeatToggle::Selected);
        assert!(tracker.view().seat(1).unwrap().selected);
        assert_in_sync(&tracker);

        assert_eq!(tracker.toggle(&1).unwrap(), SeatToggle::Deselected);
        assert!(tracker.view().selected_ids().is_empty());
        assert!(!tracker.view().submit_enabled());
        assert_in_sync(&tracker);

        tracker.toggle(&1).unwrap();
        assert_eq!(tracker.reset(), 1);
        assert!(tracker.view().selected_ids().is_empty());
        assert_in_sync(&tracker);
    }

    #[test]
    fn test_random_clicks_keep_view_in_sync() {
        let mut rng = rand::thread_rng();
        let ids = ["A1", " A1 ", "B2", "C3"];

        for _ in 0..50 {
            let mut seats: Vec<MemorySeat> = (0..6)
                .map(|_| {
                    let id = ids[rng.gen_range(0..ids.len())];
                    let seat = if rng.gen_bool(0.8) {
                        MemorySeat::available(id)
                    } else {
                        MemorySeat::reserved(id)
                    };
                    MemorySeat {
                        selected: rng.gen_bool(0.3),
                        ..seat
                    }
                })
                .collect();
            seats.push(MemorySeat {
                selected: rng.gen_bool(0.3),
                ..MemorySeat::reserved("D4")
            });
            seats.push(MemorySeat {
                selected: rng.gen_bool(0.3),
                ..MemorySeat::without_id()
            });
            let seat_count = seats.len();
            let (mut tracker, _recorder) = tracker_for(seats);
            tracker.page_ready();
            assert_in_sync(&tracker);
            let mut form = FormFields::new();

            for _ in 0..100 {
                match rng.gen_range(0..10) {
                    0 => {
                        tracker.submit(&mut form).unwrap();
                        assert!(form.count("seat_ids") <= 1);
                    }
                    1 => {
                        tracker.reset();
                    }
                    _ => {
                        let index = rng.gen_range(0..seat_count);
                        let _ = tracker.toggle(&index);
                    }
                }
                assert_in_sync(&tracker);
                assert!(!tracker.is_selected(&seat("D4")));
            }
        }
    }
}
