//! View model for a searchable select dropdown.
//!
//! This crate models the state behind a "select picker" control: a dropdown
//! listing options, filtered by a search box, with single or multiple
//! selection. It provides:
//!
//! - **Item access**: label/value/group accessors for arbitrary item types
//! - **Search matching**: substring or fuzzy ("advanced") filtering
//! - **Projection**: filtered, annotated rows with collapsed group headers
//! - **Summaries**: the button label, select-all/none label and glyph
//! - **Actions**: select, toggle all/none, clear filter
//! - **Configuration**: load picker settings from TOML or JSON
//!
//! Rendering is left to the host. The host reads
//! [`SelectPicker::grouped_rows`] and the summary values, and calls the
//! action methods from its event handlers.
//!
//! # Example
//!
//! ```
//! use select_picker::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Produce {
//!     name: &'static str,
//!     kind: &'static str,
//! }
//!
//! let accessors = OptionAccessors::new(|p: &Produce| p.name, |p: &Produce| p.name)
//!     .with_group(|p: &Produce| Some(p.kind));
//! let picker = SelectPicker::with_config(accessors, PickerConfig::default().with_multiple(true));
//!
//! picker.set_content(vec![
//!     Produce { name: "Apple", kind: "Fruit" },
//!     Produce { name: "Banana", kind: "Fruit" },
//!     Produce { name: "Carrot", kind: "Veg" },
//! ]);
//! picker.set_search_filter(Some("an"));
//!
//! let rows = picker.grouped_rows();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].group.as_deref(), Some("Fruit"));
//! assert_eq!(rows[1].group, None);
//! ```

pub mod config;
pub mod item;
pub mod matcher;
pub mod picker;
pub mod projection;
pub mod selection;
pub mod summary;

mod error;

pub use config::PickerConfig;
pub use error::{Error, Result};
pub use item::{Label, OptionAccessors, OptionValue, PickerItem, PickerOption};
pub use matcher::{LiveSearch, SearchMatcher};
pub use picker::SelectPicker;
pub use projection::{ProjectedRow, Projection, ProjectionOptions, RowSet};
pub use selection::{Selection, SelectionMode};
pub use summary::{Glyph, SelectionState, SummaryArgs, Translator};

pub use select_picker_core::{Deferred, DeferredState, Resolver, Signal};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::PickerConfig;
    pub use crate::item::{Label, OptionAccessors, OptionValue, PickerOption};
    pub use crate::matcher::LiveSearch;
    pub use crate::picker::SelectPicker;
    pub use crate::projection::{ProjectedRow, RowSet};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::summary::{Glyph, SelectionState, Translator};
    pub use select_picker_core::Deferred;
}
