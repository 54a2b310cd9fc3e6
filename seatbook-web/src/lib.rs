//! Browser binding for the seat tracker.
//!
//! `mount()` wires the booking page: seat clicks toggle the selection, the
//! booking form gets a single hidden `seat_ids` field on submit, and the
//! sidebar button opens/closes the sidebar. Markup must not carry inline
//! `onclick` handlers for these elements.

use serde::{Deserialize, Serialize};
use seatbook_core::{CoreError, SidebarConfig, TrackerConfig};

pub mod fields;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod form;
#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, toggle_sidebar};

/// Everything `mount()` accepts as JSON; missing keys fall back to the
/// booking page defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub tracker: TrackerConfig,
    pub sidebar: SidebarConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub fn parse_page_config(json: Option<&str>) -> Result<PageConfig, WebError> {
    let config = match json.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => serde_json::from_str(json)?,
        None => PageConfig::default(),
    };
    config.tracker.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_config() {
        let config = parse_page_config(None).unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(parse_page_config(Some("  ")).unwrap(), config);
        assert_eq!(config.tracker.form_id, "booking-form");
        assert_eq!(config.sidebar.toggle_selector, ".toggle-sidebar");
    }

    #[test]
    fn test_page_config_overrides() {
        let json = r#"{ "tracker": { "seat_selector": ".hall .seat" }, "sidebar": { "open_label": "x" } }"#;
        let config = parse_page_config(Some(json)).unwrap();
        assert_eq!(config.tracker.seat_selector, ".hall .seat");
        assert_eq!(config.tracker.field_name, "seat_ids");
        assert_eq!(config.sidebar.open_label, "x");
    }

    #[test]
    fn test_invalid_page_config() {
        assert!(matches!(parse_page_config(Some("{")), Err(WebError::Config(_))));
        let json = r#"{ "tracker": { "form_id": "" } }"#;
        assert!(matches!(parse_page_config(Some(json)), Err(WebError::Core(_))));
    }
}
