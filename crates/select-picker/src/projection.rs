//! The filtering and grouping pipeline.
//!
//! A projection turns the content collection into the rows a dropdown
//! renders. It runs in two steps:
//!
//! 1. [`project`] filters the content through a [`SearchMatcher`], reads each
//!    item's label/value/group, and annotates selection state.
//! 2. [`suppress_repeated_group_headers`] blanks the group of every row that
//!    continues the previous row's group, so a header renders once per run.
//!
//! The second step must run on filtered rows: filtering can make two rows of
//! the same group adjacent.
//!
//! [`Projection`] bundles both outputs along with the selected/unselected
//! partitions that the picker's labels and bulk actions read.

use crate::item::{Label, OptionAccessors, OptionValue, PickerItem};
use crate::matcher::SearchMatcher;
use crate::selection::Selection;

/// One rendered option.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow<T> {
    /// The underlying content item.
    pub item: T,
    /// The group heading to render above this row, if any.
    pub group: Option<String>,
    /// The display label.
    pub label: Label,
    /// The submitted value.
    pub value: OptionValue,
    /// Whether the item is in the current selection.
    pub selected: bool,
    /// Whether this is the first row of the projection.
    pub first: bool,
}

/// Options that shape a projection beyond the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Show every item of a group whose heading matches the filter.
    pub match_groups: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self { match_groups: true }
    }
}

/// Filter `content` and annotate each surviving item.
///
/// An item is kept when its label matches, or (with `match_groups`) when its
/// group matches. Order is preserved. The first kept row is flagged
/// [`first`](ProjectedRow::first).
pub fn project<T: PickerItem>(
    content: &[T],
    selection: &Selection<T>,
    matcher: &SearchMatcher,
    accessors: &OptionAccessors<T>,
    options: ProjectionOptions,
) -> Vec<ProjectedRow<T>> {
    let selected = selection.normalized();

    let mut rows: Vec<ProjectedRow<T>> = content
        .iter()
        .filter_map(|item| {
            let label = accessors.label(item);
            let group = accessors.group(item);
            let group_matches = options.match_groups && matcher.matches(group.as_deref());
            if !group_matches && !matcher.matches(Some(label.text())) {
                return None;
            }
            Some(ProjectedRow {
                item: item.clone(),
                value: accessors.value(item),
                selected: selected.contains(item),
                first: false,
                group,
                label,
            })
        })
        .collect();

    if let Some(first) = rows.first_mut() {
        first.first = true;
    }
    rows
}

/// Blank the group of each row whose group equals the previous row's.
///
/// The comparison is against the group value the previous row carried in
/// the input, so an ungrouped row ends a run and the next grouped row shows
/// its header again.
pub fn suppress_repeated_group_headers<T>(mut rows: Vec<ProjectedRow<T>>) -> Vec<ProjectedRow<T>> {
    let mut last_group: Option<String> = None;
    for (index, row) in rows.iter_mut().enumerate() {
        if index > 0 && row.group == last_group {
            row.group = None;
        } else {
            last_group = row.group.clone();
        }
    }
    rows
}

/// Which partition of the rows an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSet {
    /// Rows whose item is selected.
    Selected,
    /// Rows whose item is not selected.
    Unselected,
}

/// A complete projection of the picker's current inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    rows: Vec<ProjectedRow<T>>,
    grouped_rows: Vec<ProjectedRow<T>>,
}

impl<T: PickerItem> Projection<T> {
    /// Run the full pipeline.
    pub fn compute(
        content: &[T],
        selection: &Selection<T>,
        matcher: &SearchMatcher,
        accessors: &OptionAccessors<T>,
        options: ProjectionOptions,
    ) -> Self {
        let rows = project(content, selection, matcher, accessors, options);
        let grouped_rows = suppress_repeated_group_headers(rows.clone());
        Self { rows, grouped_rows }
    }

    /// A projection with no rows.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            grouped_rows: Vec::new(),
        }
    }

    /// Filtered rows with every row's group intact.
    pub fn rows(&self) -> &[ProjectedRow<T>] {
        &self.rows
    }

    /// Filtered rows with repeated group headers blanked.
    pub fn grouped_rows(&self) -> &[ProjectedRow<T>] {
        &self.grouped_rows
    }

    /// Rows in the given partition, in projection order.
    pub fn row_set(&self, set: RowSet) -> Vec<ProjectedRow<T>> {
        let want_selected = set == RowSet::Selected;
        self.rows
            .iter()
            .filter(|row| row.selected == want_selected)
            .cloned()
            .collect()
    }

    /// Rows whose item is selected.
    pub fn selected_rows(&self) -> Vec<ProjectedRow<T>> {
        self.row_set(RowSet::Selected)
    }

    /// Rows whose item is not selected.
    pub fn unselected_rows(&self) -> Vec<ProjectedRow<T>> {
        self.row_set(RowSet::Unselected)
    }

    /// Labels of the selected rows, in projection order.
    pub fn selected_labels(&self) -> Vec<Label> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.label.clone())
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row survived filtering.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: PickerItem> Default for Projection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::LiveSearch;

    #[derive(Debug, Clone, PartialEq)]
    struct Produce {
        name: &'static str,
        kind: Option<&'static str>,
    }

    fn produce(name: &'static str, kind: Option<&'static str>) -> Produce {
        Produce { name, kind }
    }

    fn accessors() -> OptionAccessors<Produce> {
        OptionAccessors::new(|p: &Produce| p.name, |p: &Produce| p.name.to_lowercase())
            .with_group(|p: &Produce| p.kind)
    }

    fn groceries() -> Vec<Produce> {
        vec![
            produce("Apple", Some("Fruit")),
            produce("Banana", Some("Fruit")),
            produce("Carrot", Some("Veg")),
        ]
    }

    fn matcher(filter: Option<&str>) -> SearchMatcher {
        SearchMatcher::new(filter, LiveSearch::Enabled).unwrap()
    }

    fn names<T>(rows: &[ProjectedRow<T>]) -> Vec<&str> {
        rows.iter().map(|r| r.label.text()).collect()
    }

    #[test]
    fn test_project_annotates_rows() {
        let content = groceries();
        let selection = Selection::Single(content[1].clone());
        let rows = project(
            &content,
            &selection,
            &matcher(None),
            &accessors(),
            ProjectionOptions::default(),
        );

        assert_eq!(names(&rows), vec!["Apple", "Banana", "Carrot"]);
        assert_eq!(
            rows.iter().map(|r| r.selected).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert_eq!(
            rows.iter().map(|r| r.first).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(rows[2].value, OptionValue::from("carrot"));
        assert_eq!(rows[2].group.as_deref(), Some("Veg"));
    }

    #[test]
    fn test_filter_with_group_suppression() {
        let projection = Projection::compute(
            &groceries(),
            &Selection::None,
            &matcher(Some("an")),
            &accessors(),
            ProjectionOptions::default(),
        );

        assert_eq!(names(projection.rows()), vec!["Apple", "Banana"]);
        let grouped = projection.grouped_rows();
        assert_eq!(grouped[0].group.as_deref(), Some("Fruit"));
        assert!(grouped[0].first);
        assert_eq!(grouped[1].group, None);
    }

    #[test]
    fn test_group_match_shows_whole_group() {
        let content = groceries();
        let rows = project(
            &content,
            &Selection::None,
            &matcher(Some("veg")),
            &accessors(),
            ProjectionOptions::default(),
        );
        assert_eq!(names(&rows), vec!["Carrot"]);

        let rows = project(
            &content,
            &Selection::None,
            &matcher(Some("fruit")),
            &accessors(),
            ProjectionOptions {
                match_groups: false,
            },
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_result_has_no_first() {
        let rows = project(
            &groceries(),
            &Selection::None,
            &matcher(Some("zzz")),
            &accessors(),
            ProjectionOptions::default(),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_filtering_makes_repeats_adjacent() {
        let content = vec![
            produce("Apple", Some("Fruit")),
            produce("Carrot", Some("Veg")),
            produce("Banana", Some("Fruit")),
        ];
        let projection = Projection::compute(
            &content,
            &Selection::None,
            &matcher(Some("an")),
            &accessors(),
            ProjectionOptions::default(),
        );
        // Apple is dropped; Banana is alone in its run.
        assert_eq!(names(projection.grouped_rows()), vec!["Banana"]);
        assert_eq!(projection.grouped_rows()[0].group.as_deref(), Some("Fruit"));
    }

    #[test]
    fn test_ungrouped_row_breaks_run() {
        let content = vec![
            produce("Apple", Some("Fruit")),
            produce("Bread", None),
            produce("Cherry", Some("Fruit")),
            produce("Date", Some("Fruit")),
        ];
        let rows = suppress_repeated_group_headers(project(
            &content,
            &Selection::None,
            &matcher(None),
            &accessors(),
            ProjectionOptions::default(),
        ));

        let groups: Vec<_> = rows.iter().map(|r| r.group.as_deref()).collect();
        assert_eq!(groups, vec![Some("Fruit"), None, Some("Fruit"), None]);
    }

    #[test]
    fn test_suppression_is_idempotent() {
        let content = vec![
            produce("Apple", Some("Fruit")),
            produce("Banana", Some("Fruit")),
            produce("Bread", None),
            produce("Carrot", Some("Veg")),
            produce("Leek", Some("Veg")),
            produce("Cherry", Some("Fruit")),
        ];
        let once = suppress_repeated_group_headers(project(
            &content,
            &Selection::None,
            &matcher(None),
            &accessors(),
            ProjectionOptions::default(),
        ));
        let twice = suppress_repeated_group_headers(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let content = groceries();
        for filter in ["a", "an", "r", "o", "fruit", ""] {
            let rows = project(
                &content,
                &Selection::None,
                &matcher(Some(filter)),
                &accessors(),
                ProjectionOptions::default(),
            );
            let mut source = content.iter();
            for row in &rows {
                assert!(source.any(|item| *item == row.item), "filter {filter:?} reordered rows");
            }
        }
    }

    #[test]
    fn test_partitions() {
        let content = groceries();
        let selection = Selection::Multiple(vec![content[2].clone(), content[0].clone()]);
        let projection = Projection::compute(
            &content,
            &selection,
            &matcher(None),
            &accessors(),
            ProjectionOptions::default(),
        );

        assert_eq!(names(&projection.selected_rows()), vec!["Apple", "Carrot"]);
        assert_eq!(names(&projection.unselected_rows()), vec!["Banana"]);
        assert_eq!(
            projection.selected_labels(),
            vec![Label::new("Apple"), Label::new("Carrot")]
        );
        assert_eq!(projection.len(), 3);
    }
}
