//! The select picker view model.
//!
//! [`SelectPicker`] owns the picker's inputs (content, selection, search
//! filter, accessors, configuration) as reactive properties, derives the
//! [`Projection`] through a memoized [`Binding`], and exposes the user
//! actions a dropdown wires to its controls.
//!
//! Every input setter invalidates the projection and emits
//! [`projection_invalidated`](SelectPicker::projection_invalidated); reading
//! any derived value afterwards recomputes it once.
//!
//! # Example
//!
//! ```
//! use select_picker::{OptionAccessors, PickerConfig, SelectPicker};
//!
//! let picker = SelectPicker::with_config(
//!     OptionAccessors::<&'static str>::from_options(),
//!     PickerConfig::default().with_multiple(true),
//! );
//! picker.set_content(vec!["Apple", "Banana", "Carrot"]);
//!
//! picker.toggle_select_all_none();
//! assert!(picker.all_items_selected());
//! assert_eq!(picker.selection_summary().text(), "3 items selected");
//!
//! picker.set_search_filter(Some("an"));
//! assert_eq!(picker.rows().len(), 1);
//! ```
//!
//! # Deferred inputs
//!
//! Content and selection may be supplied as a [`Deferred`]. While pending,
//! the picker shows an empty value. Each resolution is applied as if passed
//! to the matching setter; the last one to arrive wins.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use select_picker_core::logging::{span_names, targets};
use select_picker_core::{Binding, Deferred, PerfSpan, Property, Signal};

use crate::config::PickerConfig;
use crate::item::{Label, OptionAccessors, PickerItem};
use crate::matcher::SearchMatcher;
use crate::projection::{ProjectedRow, Projection, RowSet};
use crate::selection::{Selection, SelectionMode};
use crate::summary::{summarize, Glyph, SelectionState, Translator};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Inputs the projection is derived from.
struct PickerState<T> {
    content: Property<Vec<T>>,
    selection: Property<Selection<T>>,
    search_filter: Property<Option<String>>,
    accessors: RwLock<OptionAccessors<T>>,
    config: Property<PickerConfig>,
}

impl<T: PickerItem> PickerState<T> {
    fn compute_projection(&self) -> Projection<T> {
        let _span = tracing::debug_span!(target: targets::PICKER, span_names::PROJECTION).entered();
        let _perf = PerfSpan::new("project_rows");
        let config = self.config.get();
        let matcher = self
            .search_filter
            .with(|filter| SearchMatcher::new(filter.as_deref(), config.live_search))
            .unwrap_or_else(|err| {
                tracing::warn!(target: targets::PICKER, error = %err, "search filter rejected, hiding all rows");
                SearchMatcher::Nothing
            });
        // Accessors are host code; run them with no input locked.
        let accessors = self.accessors.read().clone();
        let selection = self.selection.get();
        let content = self.content.get();

        let projection = Projection::compute(
            &content,
            &selection,
            &matcher,
            &accessors,
            config.projection_options(),
        );
        tracing::trace!(target: targets::PICKER, rows = projection.len(), "projection recomputed");
        projection
    }
}

/// Tracks which write to an input is the latest one.
///
/// Every direct set or deferred subscription starts a new generation. Only a
/// resolution belonging to the current generation may clear the pending flag.
#[derive(Default)]
struct InputGeneration {
    current: AtomicU64,
    pending: AtomicBool,
}

impl InputGeneration {
    fn begin(&self, pending: bool) -> u64 {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        self.pending.store(pending, Ordering::Release);
        generation
    }

    fn settle(&self, generation: u64) {
        if self.current.load(Ordering::Acquire) == generation {
            self.pending.store(false, Ordering::Release);
        } else {
            tracing::trace!(target: targets::PICKER, generation, "superseded input resolved");
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

struct PickerInner<T> {
    state: Arc<PickerState<T>>,
    projection: Binding<Arc<Projection<T>>>,
    translator: RwLock<Option<Arc<dyn Translator>>>,
    generated_id: String,
    content_input: InputGeneration,
    selection_input: InputGeneration,
    show_dropdown: Property<bool>,
    keep_dropdown_open: Property<bool>,

    content_changed: Signal<usize>,
    selection_changed: Signal<Vec<T>>,
    search_filter_changed: Signal<Option<String>>,
    projection_invalidated: Signal<()>,
    dropdown_visibility_changed: Signal<bool>,
}

/// A searchable single- or multi-select dropdown model.
///
/// `SelectPicker` is a cheap handle; clones share the same state.
///
/// # Signals
///
/// - `content_changed`: new content was applied, with its length
/// - `selection_changed`: the selection changed, with the normalized items
/// - `search_filter_changed`: the filter changed
/// - `projection_invalidated`: derived values must be re-read
/// - `dropdown_visibility_changed`: the dropdown opened or closed
pub struct SelectPicker<T> {
    inner: Arc<PickerInner<T>>,
}

impl<T> Clone for SelectPicker<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PickerItem> SelectPicker<T> {
    /// Create a picker with default configuration.
    pub fn new(accessors: OptionAccessors<T>) -> Self {
        Self::with_config(accessors, PickerConfig::default())
    }

    /// Create a picker with the given configuration.
    pub fn with_config(accessors: OptionAccessors<T>, config: PickerConfig) -> Self {
        let state = Arc::new(PickerState {
            content: Property::new(Vec::new()),
            selection: Property::new(Selection::None),
            search_filter: Property::new(None),
            accessors: RwLock::new(accessors),
            config: Property::new(config),
        });
        let source = state.clone();
        let projection = Binding::new(move || Arc::new(source.compute_projection()));
        let generated_id = format!(
            "select-picker-{}",
            NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
        );

        Self {
            inner: Arc::new(PickerInner {
                state,
                projection,
                translator: RwLock::new(None),
                generated_id,
                content_input: InputGeneration::default(),
                selection_input: InputGeneration::default(),
                show_dropdown: Property::new(false),
                keep_dropdown_open: Property::new(false),
                content_changed: Signal::new(),
                selection_changed: Signal::new(),
                search_filter_changed: Signal::new(),
                projection_invalidated: Signal::new(),
                dropdown_visibility_changed: Signal::new(),
            }),
        }
    }

    fn from_weak(weak: &Weak<PickerInner<T>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn invalidate(&self) {
        self.inner.projection.invalidate();
        self.inner.projection_invalidated.emit(());
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted with the new length when content is applied.
    pub fn content_changed(&self) -> &Signal<usize> {
        &self.inner.content_changed
    }

    /// Emitted with the normalized selection when it changes.
    pub fn selection_changed(&self) -> &Signal<Vec<T>> {
        &self.inner.selection_changed
    }

    /// Emitted when the search filter changes.
    pub fn search_filter_changed(&self) -> &Signal<Option<String>> {
        &self.inner.search_filter_changed
    }

    /// Emitted whenever an input of the projection changes.
    pub fn projection_invalidated(&self) -> &Signal<()> {
        &self.inner.projection_invalidated
    }

    /// Emitted with the new visibility when the dropdown opens or closes.
    pub fn dropdown_visibility_changed(&self) -> &Signal<bool> {
        &self.inner.dropdown_visibility_changed
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> PickerConfig {
        self.inner.state.config.get()
    }

    /// Replace the configuration.
    pub fn set_config(&self, config: PickerConfig) {
        if self.inner.state.config.set(config) {
            self.invalidate();
        }
    }

    /// Modify the configuration in place.
    pub fn update_config<F>(&self, f: F)
    where
        F: FnOnce(&mut PickerConfig),
    {
        let mut config = self.config();
        f(&mut config);
        self.set_config(config);
    }

    /// Replace the label/value/group accessors.
    pub fn set_accessors(&self, accessors: OptionAccessors<T>) {
        *self.inner.state.accessors.write() = accessors;
        self.invalidate();
    }

    /// Inject (or remove) the summary translator.
    pub fn set_translator(&self, translator: Option<Arc<dyn Translator>>) {
        *self.inner.translator.write() = translator;
    }

    /// Whether selection actions are ignored.
    pub fn is_disabled(&self) -> bool {
        self.inner.state.config.with(|c| c.disabled)
    }

    /// Enable or disable selection actions.
    pub fn set_disabled(&self, disabled: bool) {
        self.update_config(|c| c.disabled = disabled);
    }

    /// Current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner.state.config.with(PickerConfig::selection_mode)
    }

    /// The picker element's id: the configured one, else a generated one.
    pub fn element_id(&self) -> String {
        self.inner
            .state
            .config
            .with(|c| c.element_id.clone())
            .unwrap_or_else(|| self.inner.generated_id.clone())
    }

    /// Id of the dropdown menu element.
    pub fn menu_button_id(&self) -> String {
        format!("{}-dropdown-menu", self.element_id())
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The current content; empty while a deferred content is pending.
    pub fn content(&self) -> Vec<T> {
        self.inner.state.content.get()
    }

    /// Replace the content.
    ///
    /// A deferred content still pending afterwards no longer counts as
    /// pending, though its value is applied when it arrives.
    pub fn set_content(&self, content: Vec<T>) {
        self.inner.content_input.begin(false);
        self.apply_content(content);
    }

    fn apply_content(&self, content: Vec<T>) {
        let len = content.len();
        if self.inner.state.content.set(content) {
            tracing::debug!(target: targets::PICKER, len, "content replaced");
            self.invalidate();
            self.inner.content_changed.emit(len);
        }
    }

    /// Supply content that may resolve later.
    pub fn set_content_deferred(&self, content: Deferred<Vec<T>>) {
        let pending = content.is_pending();
        let generation = self.inner.content_input.begin(pending);
        if pending {
            self.apply_content(Vec::new());
        }
        let weak = Arc::downgrade(&self.inner);
        content.on_resolved(move |items| {
            if let Some(picker) = Self::from_weak(&weak) {
                picker.apply_content(items.clone());
                picker.inner.content_input.settle(generation);
            }
        });
    }

    /// Whether the most recently supplied content is still unresolved.
    pub fn is_content_pending(&self) -> bool {
        self.inner.content_input.is_pending()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selection as last set.
    pub fn selection(&self) -> Selection<T> {
        self.inner.state.selection.get()
    }

    /// The selection as an ordered list without duplicates.
    pub fn normalized_selection(&self) -> Vec<T> {
        self.inner.state.selection.with(Selection::normalized)
    }

    /// Replace the selection.
    pub fn set_selection(&self, selection: impl Into<Selection<T>>) {
        self.inner.selection_input.begin(false);
        self.apply_selection(selection.into());
    }

    fn apply_selection(&self, selection: Selection<T>) {
        if self.inner.state.selection.set(selection) {
            self.selection_updated();
        }
    }

    /// Supply a selection that may resolve later.
    pub fn set_selection_deferred(&self, selection: Deferred<Selection<T>>) {
        let pending = selection.is_pending();
        let generation = self.inner.selection_input.begin(pending);
        if pending {
            self.apply_selection(Selection::None);
        }
        let weak = Arc::downgrade(&self.inner);
        selection.on_resolved(move |resolved| {
            if let Some(picker) = Self::from_weak(&weak) {
                picker.apply_selection(resolved.clone());
                picker.inner.selection_input.settle(generation);
            }
        });
    }

    /// Whether the most recently supplied selection is still unresolved.
    pub fn is_selection_pending(&self) -> bool {
        self.inner.selection_input.is_pending()
    }

    fn selection_updated(&self) {
        self.invalidate();
        let selected = self.normalized_selection();
        tracing::debug!(target: targets::PICKER, count = selected.len(), "selection changed");
        self.inner.selection_changed.emit(selected);
    }

    // =========================================================================
    // Search filter
    // =========================================================================

    /// The current search filter.
    pub fn search_filter(&self) -> Option<String> {
        self.inner.state.search_filter.get()
    }

    /// Replace the search filter.
    pub fn set_search_filter<S: Into<String>>(&self, filter: Option<S>) {
        let filter = filter.map(Into::into);
        if self.inner.state.search_filter.set(filter.clone()) {
            self.invalidate();
            self.inner.search_filter_changed.emit(filter);
        }
    }

    /// Whether the clear-filter control should be disabled.
    pub fn clear_filter_disabled(&self) -> bool {
        self.inner
            .state
            .search_filter
            .with(|f| f.as_deref().is_none_or(str::is_empty))
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// The current projection, recomputed if any input changed.
    pub fn projection(&self) -> Arc<Projection<T>> {
        self.inner.projection.get()
    }

    /// Filtered rows with every row's group intact.
    pub fn rows(&self) -> Vec<ProjectedRow<T>> {
        self.projection().rows().to_vec()
    }

    /// Filtered rows with repeated group headers blanked; what a dropdown
    /// renders.
    pub fn grouped_rows(&self) -> Vec<ProjectedRow<T>> {
        self.projection().grouped_rows().to_vec()
    }

    /// Visible rows whose item is selected.
    pub fn selected_rows(&self) -> Vec<ProjectedRow<T>> {
        self.projection().selected_rows()
    }

    /// Visible rows whose item is not selected.
    pub fn unselected_rows(&self) -> Vec<ProjectedRow<T>> {
        self.projection().unselected_rows()
    }

    /// Whether anything is selected.
    pub fn has_selected_items(&self) -> bool {
        self.inner.state.selection.with(|s| !s.is_empty())
    }

    /// Whether the selection is as large as the content.
    ///
    /// True for an empty picker with nothing selected.
    pub fn all_items_selected(&self) -> bool {
        let selected = self.inner.state.selection.with(Selection::len);
        selected == self.inner.state.content.with(Vec::len)
    }

    /// Three-way selection state.
    pub fn selection_state(&self) -> SelectionState {
        SelectionState::from_flags(self.has_selected_items(), self.all_items_selected())
    }

    /// Indicator glyph for the select-all/none control.
    pub fn glyph(&self) -> Glyph {
        self.selection_state().glyph()
    }

    /// Label of the select-all/none control.
    pub fn select_all_none_label(&self) -> String {
        let state = self.selection_state();
        self.inner.state.config.with(|c| {
            state
                .select(&c.select_none_label, &c.select_none_label, &c.select_all_label)
                .clone()
        })
    }

    /// Summary of the selection for the dropdown button.
    pub fn selection_summary(&self) -> Label {
        let labels = self.projection().selected_labels();
        let translator = self.inner.translator.read().clone();
        // The translator is host code and may call back into the picker, so
        // no lock is held while it runs.
        let config = self.config();
        summarize(&labels, config.summary_messages(), translator.as_deref())
    }

    // =========================================================================
    // Dropdown
    // =========================================================================

    /// Whether the dropdown is open.
    pub fn is_dropdown_shown(&self) -> bool {
        self.inner.show_dropdown.get()
    }

    /// Whether the next close request will be ignored.
    pub fn keep_dropdown_open(&self) -> bool {
        self.inner.keep_dropdown_open.get()
    }

    /// Open the dropdown.
    pub fn open_dropdown(&self) {
        if self.inner.show_dropdown.set(true) {
            self.inner.dropdown_visibility_changed.emit(true);
        }
    }

    /// Request the dropdown to close.
    ///
    /// A pending keep-open request (set when a multi-select item is chosen)
    /// absorbs this call and is cleared. Returns whether the dropdown is
    /// closed afterwards.
    pub fn close_dropdown(&self) -> bool {
        if self.inner.keep_dropdown_open.replace(false).is_some() {
            tracing::trace!(target: targets::PICKER, "close absorbed by keep-open request");
            return false;
        }
        if self.inner.show_dropdown.set(false) {
            self.inner.dropdown_visibility_changed.emit(false);
        }
        true
    }

    /// Open a closed dropdown or request a close of an open one.
    pub fn toggle_dropdown(&self) {
        if self.is_dropdown_shown() {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================
    //
    // Each action returns `true`: the triggering event is consumed and should
    // not propagate further.

    /// Choose `item`.
    ///
    /// Single mode replaces the selection. Multiple mode toggles the item's
    /// membership and asks the dropdown to stay open. Ignored while disabled.
    pub fn select_item(&self, item: &T) -> bool {
        let _span =
            tracing::debug_span!(target: targets::PICKER, span_names::ACTION, action = "select_item")
                .entered();
        if self.is_disabled() {
            tracing::trace!(target: targets::PICKER, "picker disabled, ignoring selection");
            return true;
        }

        match self.selection_mode() {
            SelectionMode::Multiple => {
                self.inner.keep_dropdown_open.set(true);
                let added = self
                    .inner
                    .state
                    .selection
                    .update(|selection| selection.toggle(item.clone()));
                tracing::trace!(target: targets::PICKER, added, "toggled item");
                self.selection_updated();
            }
            SelectionMode::Single => {
                self.set_selection(Selection::Single(item.clone()));
            }
        }
        true
    }

    /// Choose every item in the given row set, one by one.
    ///
    /// The rows are captured before the first item is chosen.
    /// `selection_changed` fires once at the end, if anything changed.
    pub fn select_all_none(&self, set: RowSet) -> bool {
        let _span = tracing::debug_span!(
            target: targets::PICKER,
            span_names::ACTION,
            action = "select_all_none"
        )
        .entered();
        let rows = self.projection().row_set(set);
        tracing::debug!(target: targets::PICKER, ?set, rows = rows.len(), "bulk selection");
        let before = self.selection();
        let was_blocked = self.inner.selection_changed.set_blocked(true);
        for row in &rows {
            self.select_item(&row.item);
        }
        self.inner.selection_changed.set_blocked(was_blocked);

        if self.inner.state.selection.with(|after| *after != before) {
            self.inner.selection_changed.emit(self.normalized_selection());
        }
        true
    }

    /// Deselect every visible selected row if anything is selected,
    /// otherwise select every visible row.
    pub fn toggle_select_all_none(&self) -> bool {
        let set = if self.has_selected_items() {
            RowSet::Selected
        } else {
            RowSet::Unselected
        };
        self.select_all_none(set)
    }

    /// Clear the search filter.
    pub fn clear_filter(&self) -> bool {
        self.set_search_filter(None::<String>);
        true
    }
}

impl<T: PickerItem + fmt::Debug> fmt::Debug for SelectPicker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectPicker")
            .field("element_id", &self.element_id())
            .field("content", &self.inner.state.content)
            .field("selection", &self.inner.state.selection)
            .field("search_filter", &self.inner.state.search_filter)
            .field("config", &self.inner.state.config)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SelectPicker<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SummaryArgs;
    use parking_lot::Mutex;

    fn picker(multiple: bool) -> SelectPicker<&'static str> {
        let picker = SelectPicker::with_config(
            OptionAccessors::from_options(),
            PickerConfig::default().with_multiple(multiple),
        );
        picker.set_content(vec!["Apple", "Banana", "Carrot"]);
        picker
    }

    #[test]
    fn test_single_mode_replaces() {
        let picker = picker(false);
        picker.select_item(&"Apple");
        picker.select_item(&"Banana");

        assert_eq!(picker.selection(), Selection::Single("Banana"));
        assert!(!picker.keep_dropdown_open());
    }

    #[test]
    fn test_multiple_mode_toggles() {
        let picker = picker(true);
        picker.select_item(&"Apple");
        picker.select_item(&"Carrot");
        assert_eq!(picker.normalized_selection(), vec!["Apple", "Carrot"]);
        assert!(picker.keep_dropdown_open());

        picker.select_item(&"Apple");
        assert_eq!(picker.normalized_selection(), vec!["Carrot"]);
    }

    #[test]
    fn test_disabled_ignores_actions() {
        let picker = picker(true);
        picker.set_disabled(true);
        assert!(picker.select_item(&"Apple"));
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn test_projection_is_memoized() {
        let picker = picker(false);
        let first = picker.projection();
        let second = picker.projection();
        assert!(Arc::ptr_eq(&first, &second));

        picker.set_search_filter(Some("a"));
        assert!(!Arc::ptr_eq(&first, &picker.projection()));
    }

    #[test]
    fn test_unchanged_input_does_not_invalidate() {
        let picker = picker(false);
        let invalidations = Arc::new(Mutex::new(0));
        let counter = invalidations.clone();
        picker
            .projection_invalidated()
            .connect(move |_| *counter.lock() += 1);

        picker.set_search_filter(None::<String>);
        picker.set_content(vec!["Apple", "Banana", "Carrot"]);
        assert_eq!(*invalidations.lock(), 0);

        picker.set_search_filter(Some("x"));
        assert_eq!(*invalidations.lock(), 1);
    }

    #[test]
    fn test_translator_may_reenter_picker() {
        let picker = picker(true);
        picker.update_config(|c| c.summary_message_key = Some("fruit.summary".into()));

        let weak = Arc::downgrade(&picker.inner);
        let translator: Arc<dyn Translator> = Arc::new(move |key: &str, args: &SummaryArgs| {
            if let Some(picker) = SelectPicker::from_weak(&weak) {
                picker.update_config(|c| c.select_all_label = "Every fruit".into());
            }
            format!("{key}:{}", args.count)
        });
        picker.set_translator(Some(translator));
        picker.select_item(&"Apple");

        assert_eq!(picker.selection_summary().text(), "fruit.summary:1");
        assert_eq!(picker.config().select_all_label, "Every fruit");
    }

    #[test]
    fn test_superseded_deferred_keeps_pending() {
        let picker = picker(false);
        let (older, older_resolver) = Deferred::pending();
        let (newer, newer_resolver) = Deferred::pending();
        picker.set_selection_deferred(older);
        picker.set_selection_deferred(newer);

        older_resolver.resolve(Selection::Single("Apple"));
        assert!(picker.is_selection_pending());
        assert_eq!(picker.selection(), Selection::Single("Apple"));

        newer_resolver.resolve(Selection::Single("Carrot"));
        assert!(!picker.is_selection_pending());

        let (late, late_resolver) = Deferred::pending();
        picker.set_selection_deferred(late);
        picker.select_item(&"Banana");
        assert!(!picker.is_selection_pending());
        late_resolver.resolve(Selection::None);
        assert!(!picker.is_selection_pending());
    }

    #[test]
    fn test_bulk_selection_notifies_once() {
        let picker = picker(true);
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let log = notifications.clone();
        picker
            .selection_changed()
            .connect(move |items: &Vec<&'static str>| log.lock().push(items.len()));

        picker.toggle_select_all_none();
        picker.toggle_select_all_none();
        assert_eq!(*notifications.lock(), vec![3, 0]);

        picker.set_search_filter(Some("zzz"));
        picker.toggle_select_all_none();
        assert_eq!(notifications.lock().len(), 2);
    }

    #[test]
    fn test_close_dropdown_respects_keep_open() {
        let picker = picker(true);
        picker.open_dropdown();
        picker.select_item(&"Apple");

        assert!(!picker.close_dropdown());
        assert!(picker.is_dropdown_shown());
        assert!(picker.close_dropdown());
        assert!(!picker.is_dropdown_shown());
    }

    #[test]
    fn test_menu_button_id() {
        let picker = picker(false);
        assert!(picker.element_id().starts_with("select-picker-"));
        assert!(picker.menu_button_id().ends_with("-dropdown-menu"));

        picker.update_config(|c| c.element_id = Some("fruit".into()));
        assert_eq!(picker.menu_button_id(), "fruit-dropdown-menu");
    }

    #[test]
    fn test_clear_filter_disabled() {
        let picker = picker(false);
        assert!(picker.clear_filter_disabled());
        picker.set_search_filter(Some(""));
        assert!(picker.clear_filter_disabled());
        picker.set_search_filter(Some("b"));
        assert!(!picker.clear_filter_disabled());
        assert!(picker.clear_filter());
        assert_eq!(picker.search_filter(), None);
    }
}
