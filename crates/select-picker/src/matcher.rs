//! Search filter matching.
//!
//! The picker filters its options with a [`SearchMatcher`] built from the
//! current search filter and the [`LiveSearch`] mode:
//!
//! - An empty (or absent) filter matches everything, including missing text.
//! - In [`LiveSearch::Advanced`] mode the filter is a fuzzy pattern: its
//!   characters must appear in order, with anything in between.
//! - Otherwise the filter is a case-insensitive substring.
//!
//! Missing text (`None`) never matches a non-empty filter.
//!
//! # Example
//!
//! ```
//! use select_picker::{LiveSearch, SearchMatcher};
//!
//! let substring = SearchMatcher::new(Some("ae"), LiveSearch::Enabled).unwrap();
//! let fuzzy = SearchMatcher::new(Some("ae"), LiveSearch::Advanced).unwrap();
//!
//! assert!(!substring.matches(Some("Apple")));
//! assert!(fuzzy.matches(Some("Apple")));
//! ```

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use select_picker_core::logging::targets;

/// Live search setting.
///
/// Hosts configure this as a boolean or as the string `"advanced"`
/// (case-insensitive). Only `Advanced` changes how the filter matches; the
/// other values decide whether a host shows its search box at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveSearch {
    /// No search box (default). A filter set programmatically still applies.
    #[default]
    Disabled,
    /// Search box with substring matching.
    Enabled,
    /// Search box with fuzzy subsequence matching.
    Advanced,
}

impl LiveSearch {
    /// Whether the host should show a search box.
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }

    /// Whether fuzzy matching is selected.
    pub fn is_advanced(self) -> bool {
        self == Self::Advanced
    }
}

impl From<bool> for LiveSearch {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl FromStr for LiveSearch {
    type Err = std::convert::Infallible;

    /// `"advanced"` in any case selects fuzzy matching, `"false"` and the
    /// empty string disable search, anything else enables substring search.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(if trimmed.eq_ignore_ascii_case("advanced") {
            Self::Advanced
        } else if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
            Self::Disabled
        } else {
            Self::Enabled
        })
    }
}

impl fmt::Display for LiveSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "false"),
            Self::Enabled => write!(f, "true"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl Serialize for LiveSearch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled => serializer.serialize_bool(true),
            Self::Advanced => serializer.serialize_str("advanced"),
        }
    }
}

impl<'de> Deserialize<'de> for LiveSearch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Mode(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(enabled) => Self::from(enabled),
            Raw::Mode(mode) => match mode.parse() {
                Ok(live_search) => live_search,
                Err(never) => match never {},
            },
        })
    }
}

/// A compiled search filter.
#[derive(Clone)]
pub enum SearchMatcher {
    /// Empty filter: everything matches.
    All,
    /// Nothing matches. Used when a filter cannot be compiled.
    Nothing,
    /// Case-insensitive substring; holds the lowercased needle.
    Substring(String),
    /// Case-insensitive fuzzy subsequence.
    Fuzzy(Regex),
}

impl SearchMatcher {
    /// Compile `filter` for the given live search mode.
    pub fn new(filter: Option<&str>, live_search: LiveSearch) -> Result<Self> {
        let filter = match filter {
            Some(filter) if !filter.is_empty() => filter,
            _ => return Ok(Self::All),
        };

        if live_search.is_advanced() {
            Self::fuzzy(filter)
        } else {
            Ok(Self::Substring(filter.to_lowercase()))
        }
    }

    /// Build a fuzzy matcher: every character of `filter`, in order, with
    /// arbitrary text between them.
    pub fn fuzzy(filter: &str) -> Result<Self> {
        let pattern = fuzzy_pattern(filter);
        tracing::trace!(target: targets::MATCHER, %pattern, "compiling fuzzy pattern");
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map(Self::Fuzzy)
            .map_err(|err| Error::invalid_search_pattern(filter, err))
    }

    /// Test a piece of option text (label or group).
    pub fn matches(&self, text: Option<&str>) -> bool {
        match (self, text) {
            (Self::All, _) => true,
            (Self::Nothing, _) | (_, None) => false,
            (Self::Substring(needle), Some(text)) => text.to_lowercase().contains(needle.as_str()),
            (Self::Fuzzy(regex), Some(text)) => regex.is_match(text),
        }
    }

    /// Whether this matcher accepts everything.
    pub fn is_match_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Debug for SearchMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "SearchMatcher::All"),
            Self::Nothing => write!(f, "SearchMatcher::Nothing"),
            Self::Substring(needle) => write!(f, "SearchMatcher::Substring({needle:?})"),
            Self::Fuzzy(regex) => write!(f, "SearchMatcher::Fuzzy({:?})", regex.as_str()),
        }
    }
}

/// Join the escaped characters of `filter` with lazy wildcards.
fn fuzzy_pattern(filter: &str) -> String {
    let mut buf = [0u8; 4];
    filter
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect::<Vec<_>>()
        .join(".*?")
}
