//! Picker configuration.
//!
//! [`PickerConfig`] holds the host-facing switches and message strings. It
//! can be built in code or loaded from TOML or JSON; every field is optional
//! in the serialized form and falls back to its default.
//!
//! ```
//! use select_picker::{LiveSearch, PickerConfig};
//!
//! let config = PickerConfig::from_toml_str(r#"
//! multiple = true
//! live_search = "advanced"
//! summary_message = "%@ fruits"
//! "#).unwrap();
//!
//! assert!(config.multiple);
//! assert_eq!(config.live_search, LiveSearch::Advanced);
//! assert_eq!(config.nothing_selected_message, "Nothing Selected");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matcher::LiveSearch;
use crate::projection::ProjectionOptions;
use crate::selection::SelectionMode;
use crate::summary::SummaryMessages;
use select_picker_core::logging::targets;

/// Default message shown when nothing is selected.
pub const DEFAULT_NOTHING_SELECTED_MESSAGE: &str = "Nothing Selected";
/// Default template for multi-item summaries.
pub const DEFAULT_SUMMARY_MESSAGE: &str = "%@ items selected";
/// Default label of the select-all control.
pub const DEFAULT_SELECT_ALL_LABEL: &str = "All";
/// Default label of the select-none control.
pub const DEFAULT_SELECT_NONE_LABEL: &str = "None";

/// Configuration of a select picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Search box mode; `"advanced"` enables fuzzy matching.
    pub live_search: LiveSearch,
    /// Allow selecting more than one item.
    pub multiple: bool,
    /// Ignore all selection actions.
    pub disabled: bool,
    /// Show every item of a group whose heading matches the filter.
    pub match_groups: bool,
    /// Id of the picker element; generated when absent.
    pub element_id: Option<String>,
    /// Summary shown when nothing is selected.
    pub nothing_selected_message: String,
    /// Summary template for more than one selected item.
    pub summary_message: String,
    /// Translation key for the summary; needs an injected translator.
    pub summary_message_key: Option<String>,
    /// Label of the control that selects everything.
    pub select_all_label: String,
    /// Label of the control that clears the selection.
    pub select_none_label: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            live_search: LiveSearch::default(),
            multiple: false,
            disabled: false,
            match_groups: true,
            element_id: None,
            nothing_selected_message: DEFAULT_NOTHING_SELECTED_MESSAGE.to_string(),
            summary_message: DEFAULT_SUMMARY_MESSAGE.to_string(),
            summary_message_key: None,
            select_all_label: DEFAULT_SELECT_ALL_LABEL.to_string(),
            select_none_label: DEFAULT_SELECT_NONE_LABEL.to_string(),
        }
    }
}

impl PickerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file, choosing the format by extension (`.json` is JSON,
    /// anything else is TOML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        tracing::debug!(target: targets::CONFIG, path = %path.display(), is_json, "loading picker config");
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder: set multiple-selection mode.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Builder: set the live search mode.
    pub fn with_live_search(mut self, live_search: impl Into<LiveSearch>) -> Self {
        self.live_search = live_search.into();
        self
    }

    /// Builder: set the element id.
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Builder: set the summary template.
    pub fn with_summary_message(mut self, template: impl Into<String>) -> Self {
        self.summary_message = template.into();
        self
    }

    /// Builder: set the summary translation key.
    pub fn with_summary_message_key(mut self, key: impl Into<String>) -> Self {
        self.summary_message_key = Some(key.into());
        self
    }

    /// Selection mode implied by [`multiple`](Self::multiple).
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multiple(self.multiple)
    }

    /// Projection options implied by this configuration.
    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            match_groups: self.match_groups,
        }
    }

    /// Messages for [`crate::summary::summarize`].
    pub fn summary_messages(&self) -> SummaryMessages<'_> {
        SummaryMessages {
            nothing_selected: &self.nothing_selected_message,
            summary: &self.summary_message,
            summary_key: self.summary_message_key.as_deref(),
        }
    }
}
