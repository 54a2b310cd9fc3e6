use serde::Serialize;
use seatbook_core::{
    CoreError, FormFields, MemoryPage, MemorySidebar, RecordingObserver, SeatSelectionTracker,
    SidebarToggle, TracingObserver, TrackerConfig,
};
use seatbook_shared::{SeatId, SelectionEvent, SubmissionPayload};
use tracing::{debug, info};
use crate::scenario::{Scenario, Step};
use crate::ReplayError;

/// What one submit step sent
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub step: usize,
    pub payload: SubmissionPayload,
    /// Whole form as it left the page
    pub form: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub submissions: Vec<SubmissionRecord>,
    pub events: Vec<SelectionEvent>,
    pub selected: Vec<SeatId>,
    /// Raw ids of the seats the page marks selected, in page order
    pub marked: Vec<String>,
    pub submit_enabled: bool,
    pub sidebar_open: bool,
    pub violations: usize,
}

/// Drive the seat tracker through a scenario on a headless page.
///
/// Clicks on seats without a usable id are skipped, the way the browser
/// binding ignores them, and show up in `violations` together with stray
/// marks cleared at page ready. Everything else that fails aborts the run.
pub fn replay(scenario: &Scenario, config: &TrackerConfig) -> Result<ReplayReport, ReplayError> {
    config.validate()?;

    let recorder = RecordingObserver::new();
    let page = MemoryPage::new(scenario.seats.clone());
    let seat_count = page.seat_count();
    let mut tracker = SeatSelectionTracker::with_observer(
        page,
        (TracingObserver, recorder.clone()),
        config.clone(),
    );
    let mut sidebar = SidebarToggle::with_observer(
        MemorySidebar::default(),
        (TracingObserver, recorder.clone()),
    );

    let mut form = FormFields::new();
    for (name, value) in &scenario.form {
        form.append(name.clone(), value.clone());
    }

    let mut submissions = Vec::new();

    for (step, action) in scenario.steps.iter().enumerate() {
        match *action {
            Step::PageReady => {
                tracker.page_ready();
            }
            Step::Click { seat } => {
                if seat >= seat_count {
                    return Err(ReplayError::UnknownSeat { step, seat, seat_count });
                }
                match tracker.toggle(&seat) {
                    Ok(outcome) => debug!("Step {}: seat {} -> {:?}", step, seat, outcome),
                    Err(CoreError::MissingSeatId) | Err(CoreError::InvalidSeatId(_)) => {
                        debug!("Step {}: skipped click on seat {}", step, seat);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Step::Submit => {
                let payload = tracker.submit(&mut form)?;
                submissions.push(SubmissionRecord {
                    step,
                    payload,
                    form: form.clone(),
                });
            }
            Step::Reset => {
                tracker.reset();
            }
            Step::ToggleSidebar => {
                sidebar.toggle();
            }
        }
    }

    let violations = recorder.count("contract_violation");
    info!(
        "Replayed {} steps: {} submissions, {} contract violations",
        scenario.steps.len(),
        submissions.len(),
        violations
    );

    Ok(ReplayReport {
        submissions,
        events: recorder.events(),
        selected: tracker.selected().iter().cloned().collect(),
        marked: tracker.view().selected_ids(),
        submit_enabled: tracker.view().submit_enabled(),
        sidebar_open: sidebar.is_open(),
        violations,
    })
}
