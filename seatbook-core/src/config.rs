use serde::{Deserialize, Serialize};
use seatbook_shared::SEAT_IDS_FIELD;
use crate::{CoreError, CoreResult};

/// How the tracker finds and marks things on the booking page.
/// Defaults match the booking page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub seat_selector: String,
    pub seat_id_attribute: String,
    pub selected_class: String,
    pub unavailable_class: String,
    pub submit_button_id: String,
    pub disabled_class: String,
    pub form_id: String,
    pub field_name: String,
    /// Discard the selection once it has been attached to a submission
    pub clear_after_submit: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seat_selector: ".seat".to_string(),
            seat_id_attribute: "data-seat-id".to_string(),
            selected_class: "selected".to_string(),
            unavailable_class: "reserved".to_string(),
            submit_button_id: "booking-submit".to_string(),
            disabled_class: "disabled".to_string(),
            form_id: "booking-form".to_string(),
            field_name: SEAT_IDS_FIELD.to_string(),
            clear_after_submit: true,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("seat_selector", &self.seat_selector),
            ("seat_id_attribute", &self.seat_id_attribute),
            ("selected_class", &self.selected_class),
            ("submit_button_id", &self.submit_button_id),
            ("form_id", &self.form_id),
            ("field_name", &self.field_name),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigError(format!("{} must not be empty", key)));
            }
        }
        // Class tokens cannot contain whitespace
        for (key, value) in [
            ("selected_class", &self.selected_class),
            ("unavailable_class", &self.unavailable_class),
            ("disabled_class", &self.disabled_class),
        ] {
            if value.chars().any(char::is_whitespace) {
                return Err(CoreError::ConfigError(format!("{} must be a single class name", key)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub sidebar_selector: String,
    pub toggle_selector: String,
    pub open_class: String,
    pub opened_class: String,
    pub closed_label: String,
    pub open_label: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_selector: ".main-sidebar".to_string(),
            toggle_selector: ".toggle-sidebar".to_string(),
            open_class: "open".to_string(),
            opened_class: "opened".to_string(),
            closed_label: "☰".to_string(),
            open_label: "✖".to_string(),
        }
    }
}
