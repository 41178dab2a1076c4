//! Logging facilities for the select picker crates.
//!
//! Both crates instrument themselves with `tracing`. To see logs, install a
//! subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("select_picker=debug,select_picker_core=trace")
//!     .init();
//! ```
//!
//! The constants in [`targets`] and [`span_names`] can be used in filter
//! directives to narrow output to a single subsystem.

/// Span names used for tracing.
pub mod span_names {
    /// Projection recompute span.
    pub const PROJECTION: &str = "select_picker::projection";
    /// User action span.
    pub const ACTION: &str = "select_picker::action";
    /// Timing spans opened with [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "select_picker::perf";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "select_picker_core::signal";
    /// Property and binding target.
    pub const PROPERTY: &str = "select_picker_core::property";
    /// Deferred value target.
    pub const DEFERRED: &str = "select_picker_core::deferred";
    /// Picker view model target.
    pub const PICKER: &str = "select_picker::picker";
    /// Search matcher target.
    pub const MATCHER: &str = "select_picker::matcher";
    /// Configuration loading target.
    pub const CONFIG: &str = "select_picker::config";
}

/// A guard for timing an operation.
///
/// Creates an `info` level span under the [`span_names::PERF`] target that
/// stays entered until the guard is dropped.
///
/// ```ignore
/// let _span = PerfSpan::new("project_rows");
/// // ... work ...
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
