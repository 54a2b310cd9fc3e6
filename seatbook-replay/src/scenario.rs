use std::collections::BTreeMap;
use std::path::Path;
use serde::Deserialize;
use seatbook_core::MemorySeat;
use crate::ReplayError;

/// A scripted booking page session
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub seats: Vec<MemorySeat>,
    /// Fields the form markup already carries (e.g. `session_id`)
    #[serde(default)]
    pub form: BTreeMap<String, String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One user or browser event. Seats are addressed by index so elements
/// without a seat id can still be clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    PageReady,
    Click { seat: usize },
    Submit,
    Reset,
    ToggleSidebar,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
