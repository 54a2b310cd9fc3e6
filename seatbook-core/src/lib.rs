pub mod config;
pub mod form;
pub mod memory;
pub mod observer;
pub mod selection;
pub mod sidebar;
pub mod tracker;
pub mod view;

pub use config::{SidebarConfig, TrackerConfig};
pub use form::{FormFields, SubmissionForm};
pub use memory::{MemoryPage, MemorySeat, MemorySidebar};
pub use observer::{RecordingObserver, SelectionObserver, TracingObserver};
pub use selection::SelectionState;
pub use sidebar::{SidebarToggle, SidebarView};
pub use tracker::{SeatSelectionTracker, SeatToggle};
pub use view::BookingView;

pub use seatbook_shared::{SeatId, SeatIdError, SelectionEvent, SubmissionPayload};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Seat element has no seat id")]
    MissingSeatId,
    #[error("Invalid seat id: {0}")]
    InvalidSeatId(#[from] SeatIdError),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    #[error("Failed to write form field {field}: {reason}")]
    FormWriteError { field: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
