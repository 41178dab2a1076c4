//! Summary labels and selection state.
//!
//! The dropdown button shows a summary of the selection:
//!
//! | selected | summary                                        |
//! |----------|------------------------------------------------|
//! | 0        | the "nothing selected" message                 |
//! | 1        | the selected row's label                       |
//! | n > 1    | the summary template with count, first, list   |
//!
//! When a [`Translator`] is injected and a message key is configured, it
//! produces the summary for any non-empty selection instead.
//!
//! Templates use `%@` for the next argument and `%@N` for the N-th
//! (1-based). The arguments are the count, the first label and the
//! comma-joined list of labels.

use std::fmt;

use crate::item::Label;

/// Three-way state of the selection relative to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing is selected.
    NoneSelected,
    /// Some, but not all, items are selected.
    SomeSelected,
    /// Every item is selected. Also the state of an empty picker.
    AllSelected,
}

impl SelectionState {
    /// Classify from the two aggregate flags. "All" takes precedence.
    pub fn from_flags(has_selected_items: bool, all_items_selected: bool) -> Self {
        if all_items_selected {
            Self::AllSelected
        } else if has_selected_items {
            Self::SomeSelected
        } else {
            Self::NoneSelected
        }
    }

    /// Pick one of three values by state.
    pub fn select<V>(self, some: V, all: V, none: V) -> V {
        match self {
            Self::SomeSelected => some,
            Self::AllSelected => all,
            Self::NoneSelected => none,
        }
    }

    /// The indicator glyph for this state.
    pub fn glyph(self) -> Glyph {
        self.select(Glyph::Partial, Glyph::Checked, Glyph::Empty)
    }
}

/// Indicator shown next to the select-all/none control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// No indicator.
    Empty,
    /// Partially selected.
    Partial,
    /// Fully selected.
    Checked,
}

impl Glyph {
    /// Bootstrap glyphicon class for the glyph; empty for [`Glyph::Empty`].
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Partial => "glyphicon-minus",
            Self::Checked => "glyphicon-ok",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Parameters handed to a [`Translator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryArgs {
    /// Number of selected rows.
    pub count: usize,
    /// Text of the first selected label.
    pub item: String,
    /// Comma-joined text of all selected labels.
    pub list: String,
}

/// Host-provided translation of the summary message.
pub trait Translator: Send + Sync {
    /// Translate `key` with the summary parameters.
    fn translate(&self, key: &str, args: &SummaryArgs) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &SummaryArgs) -> String + Send + Sync,
{
    fn translate(&self, key: &str, args: &SummaryArgs) -> String {
        self(key, args)
    }
}

/// Message strings used to build the summary.
#[derive(Debug, Clone, Copy)]
pub struct SummaryMessages<'a> {
    /// Shown when nothing is selected.
    pub nothing_selected: &'a str,
    /// Template for more than one selected row.
    pub summary: &'a str,
    /// Translation key; only used together with a translator.
    pub summary_key: Option<&'a str>,
}

/// Build the summary label for the given selected labels.
///
/// A summary that embeds the first label keeps that label's trust marking.
pub fn summarize(
    selected: &[Label],
    messages: SummaryMessages<'_>,
    translator: Option<&dyn Translator>,
) -> Label {
    let Some(first) = selected.first() else {
        return Label::new(messages.nothing_selected);
    };
    let count = selected.len();
    let list = selected
        .iter()
        .map(Label::text)
        .collect::<Vec<_>>()
        .join(", ");

    if let (Some(translator), Some(key)) = (translator, messages.summary_key) {
        if !key.trim().is_empty() {
            let args = SummaryArgs {
                count,
                item: first.text().to_string(),
                list,
            };
            return Label::new(translator.translate(key, &args)).with_trust_of(first);
        }
    }

    if count == 1 {
        return first.clone();
    }

    let count = count.to_string();
    Label::new(format_template(messages.summary, &[&count, first.text(), &list]))
        .with_trust_of(first)
}

/// Substitute `%@` and `%@N` placeholders in `template`.
///
/// Unnumbered placeholders consume arguments in order; numbered ones are
/// 1-based. Missing arguments render as nothing.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(pos) = rest.find("%@") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 2..];

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let index = if digits > 0 {
            let position = rest[..digits].parse::<usize>().unwrap_or(0);
            rest = &rest[digits..];
            position.checked_sub(1)
        } else {
            next += 1;
            Some(next - 1)
        };

        if let Some(arg) = index.and_then(|i| args.get(i)) {
            out.push_str(arg);
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: SummaryMessages<'static> = SummaryMessages {
        nothing_selected: "Nothing Selected",
        summary: "%@ items selected",
        summary_key: None,
    };

    fn labels(texts: &[&str]) -> Vec<Label> {
        texts.iter().map(|t| Label::new(*t)).collect()
    }

    #[test]
    fn test_state_from_flags() {
        assert_eq!(SelectionState::from_flags(false, false), SelectionState::NoneSelected);
        assert_eq!(SelectionState::from_flags(true, false), SelectionState::SomeSelected);
        assert_eq!(SelectionState::from_flags(true, true), SelectionState::AllSelected);
        assert_eq!(SelectionState::from_flags(false, true), SelectionState::AllSelected);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(SelectionState::NoneSelected.glyph(), Glyph::Empty);
        assert_eq!(SelectionState::SomeSelected.glyph().css_class(), "glyphicon-minus");
        assert_eq!(SelectionState::AllSelected.glyph().to_string(), "glyphicon-ok");
    }

    #[test]
    fn test_summary_counts() {
        assert_eq!(summarize(&[], MESSAGES, None).text(), "Nothing Selected");
        assert_eq!(summarize(&labels(&["Apple"]), MESSAGES, None).text(), "Apple");
        assert_eq!(
            summarize(&labels(&["Apple", "Banana", "Carrot"]), MESSAGES, None).text(),
            "3 items selected"
        );
    }

    #[test]
    fn test_summary_template_positions() {
        let messages = SummaryMessages {
            summary: "%@1 picked (%@2 first): %@3",
            ..MESSAGES
        };
        let summary = summarize(&labels(&["Apple", "Banana", "Carrot"]), messages, None);
        assert_eq!(summary.text(), "3 picked (Apple first): Apple, Banana, Carrot");
    }

    #[test]
    fn test_format_template() {
        assert_eq!(format_template("%@ and %@", &["a", "b"]), "a and b");
        assert_eq!(format_template("%@2-%@1", &["a", "b"]), "b-a");
        assert_eq!(format_template("%@ %@ %@", &["a"]), "a  ");
        assert_eq!(format_template("%@0|%@9", &["a"]), "|");
        assert_eq!(format_template("100% done", &[]), "100% done");
    }

    #[test]
    fn test_trusted_first_label_marks_summary() {
        let selected = vec![Label::trusted("<i>Apple</i>"), Label::new("Banana")];
        let summary = summarize(&selected, MESSAGES, None);
        assert!(summary.is_trusted());

        let single = summarize(&selected[..1], MESSAGES, None);
        assert!(single.is_trusted());
        assert_eq!(single.text(), "<i>Apple</i>");
    }

    #[test]
    fn test_translator_path() {
        let translator = |key: &str, args: &SummaryArgs| {
            format!("{key}:{}:{}:{}", args.count, args.item, args.list)
        };
        let messages = SummaryMessages {
            summary_key: Some("picker.summary"),
            ..MESSAGES
        };

        let summary = summarize(&labels(&["Apple"]), messages, Some(&translator));
        assert_eq!(summary.text(), "picker.summary:1:Apple:Apple");

        let summary = summarize(&labels(&["A", "B"]), messages, Some(&translator));
        assert_eq!(summary.text(), "picker.summary:2:A:A, B");

        // Nothing selected never reaches the translator
        assert_eq!(summarize(&[], messages, Some(&translator)).text(), "Nothing Selected");
    }

    #[test]
    fn test_translator_needs_key() {
        let translator = |_: &str, _: &SummaryArgs| "translated".to_string();
        let summary = summarize(&labels(&["A", "B"]), MESSAGES, Some(&translator));
        assert_eq!(summary.text(), "2 items selected");
    }

    #[test]
    fn test_translated_summary_keeps_trust() {
        let translator = |_: &str, args: &SummaryArgs| format!("<b>{}</b>", args.item);
        let messages = SummaryMessages {
            summary_key: Some("k"),
            ..MESSAGES
        };
        let summary = summarize(&[Label::trusted("<i>A</i>")], messages, Some(&translator));
        assert!(summary.is_trusted());
        assert_eq!(summary.text(), "<b><i>A</i></b>");
    }
}
