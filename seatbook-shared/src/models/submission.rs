use serde::{Deserialize, Serialize};

/// The field attached to one outgoing booking form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub field: String,
    pub value: String,
    pub seat_count: usize,
}
