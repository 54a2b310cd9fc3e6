pub mod app_config;
pub mod output;
pub mod runner;
pub mod scenario;

pub use app_config::Config;
pub use output::{encode_form, render_submissions, OutputFormat};
pub use runner::{replay, ReplayReport, SubmissionRecord};
pub use scenario::{Scenario, Step};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed scenario: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Step {step} clicks seat {seat}, but the page only has {seat_count} seats")]
    UnknownSeat {
        step: usize,
        seat: usize,
        seat_count: usize,
    },
    #[error(transparent)]
    Core(#[from] seatbook_core::CoreError),
}
