//! Option items and the accessors that read them.
//!
//! The picker never inspects caller records directly. An
//! [`OptionAccessors`] bundle supplies the label, value and (optional) group
//! of each item. Types that know their own presentation can implement
//! [`PickerOption`] and use [`OptionAccessors::from_options`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Bound shared by every item type a picker can hold.
///
/// Items are compared with `PartialEq` to decide selection membership.
pub trait PickerItem: Clone + PartialEq + Send + Sync + 'static {}

impl<T> PickerItem for T where T: Clone + PartialEq + Send + Sync + 'static {}

/// Display text for an option or summary.
///
/// A label may be marked *trusted*: its text is a pre-escaped HTML fragment
/// that the renderer must insert verbatim. The marking survives summary
/// formatting (see [`crate::summary`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Label {
    text: String,
    trusted: bool,
}

impl Label {
    /// Plain text label, escaped by the renderer.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trusted: false,
        }
    }

    /// Pre-escaped HTML label, rendered verbatim.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self {
            text: html.into(),
            trusted: true,
        }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text is trusted HTML.
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Copy the trust marking of `other` onto this label.
    pub fn with_trust_of(mut self, other: &Label) -> Self {
        self.trusted = other.trusted;
        self
    }

    /// Consume the label, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Label {
    fn from(text: &String) -> Self {
        Self::new(text.clone())
    }
}

/// The value an option submits when chosen.
///
/// The picker treats it as opaque; it is carried through to the projected
/// rows for the host to use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// No value.
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
}

impl OptionValue {
    /// Returns true for [`OptionValue::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<V: Into<OptionValue>> From<Option<V>> for OptionValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Items that know how to present themselves in a picker.
pub trait PickerOption {
    /// The display label.
    fn label(&self) -> Label;

    /// The submitted value. Defaults to none.
    fn value(&self) -> OptionValue {
        OptionValue::None
    }

    /// The group heading. Defaults to ungrouped.
    fn group(&self) -> Option<String> {
        None
    }
}

impl PickerOption for String {
    fn label(&self) -> Label {
        Label::new(self.clone())
    }

    fn value(&self) -> OptionValue {
        OptionValue::String(self.clone())
    }
}

impl PickerOption for &'static str {
    fn label(&self) -> Label {
        Label::new(*self)
    }

    fn value(&self) -> OptionValue {
        OptionValue::from(*self)
    }
}

type LabelFn<T> = Arc<dyn Fn(&T) -> Label + Send + Sync>;
type ValueFn<T> = Arc<dyn Fn(&T) -> OptionValue + Send + Sync>;
type GroupFn<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Field accessors that extract presentation data from an item.
///
/// # Example
///
/// ```
/// use select_picker::{OptionAccessors, OptionValue};
///
/// struct Produce { name: &'static str, id: i64, kind: &'static str }
///
/// let accessors = OptionAccessors::new(|p: &Produce| p.name, |p: &Produce| p.id)
///     .with_group(|p: &Produce| Some(p.kind));
///
/// let apple = Produce { name: "Apple", id: 1, kind: "Fruit" };
/// assert_eq!(accessors.label(&apple).text(), "Apple");
/// assert_eq!(accessors.value(&apple), OptionValue::Int(1));
/// assert_eq!(accessors.group(&apple).as_deref(), Some("Fruit"));
/// ```
pub struct OptionAccessors<T> {
    label: LabelFn<T>,
    value: ValueFn<T>,
    group: Option<GroupFn<T>>,
}

impl<T: 'static> OptionAccessors<T> {
    /// Accessors for label and value; items are ungrouped.
    pub fn new<L, V, FL, FV>(label: FL, value: FV) -> Self
    where
        L: Into<Label>,
        V: Into<OptionValue>,
        FL: Fn(&T) -> L + Send + Sync + 'static,
        FV: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self {
            label: Arc::new(move |item: &T| label(item).into()),
            value: Arc::new(move |item: &T| value(item).into()),
            group: None,
        }
    }

    /// Add a group accessor.
    pub fn with_group<G, FG>(mut self, group: FG) -> Self
    where
        G: Into<String>,
        FG: Fn(&T) -> Option<G> + Send + Sync + 'static,
    {
        let group: GroupFn<T> = Arc::new(move |item: &T| group(item).map(Into::into));
        self.group = Some(group);
        self
    }

    /// Remove the group accessor.
    pub fn without_group(mut self) -> Self {
        self.group = None;
        self
    }

    /// Whether a group accessor is configured.
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    /// Read an item's label.
    pub fn label(&self, item: &T) -> Label {
        (self.label)(item)
    }

    /// Read an item's value.
    pub fn value(&self, item: &T) -> OptionValue {
        (self.value)(item)
    }

    /// Read an item's group; always `None` without a group accessor.
    pub fn group(&self, item: &T) -> Option<String> {
        self.group.as_ref().and_then(|group| group(item))
    }
}

impl<T: PickerOption + 'static> OptionAccessors<T> {
    /// Accessors that defer to the item's [`PickerOption`] implementation.
    pub fn from_options() -> Self {
        let group: GroupFn<T> = Arc::new(|item: &T| item.group());
        Self {
            label: Arc::new(|item: &T| item.label()),
            value: Arc::new(|item: &T| item.value()),
            group: Some(group),
        }
    }
}

impl<T> Clone for OptionAccessors<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            value: self.value.clone(),
            group: self.group.clone(),
        }
    }
}

impl<T> fmt::Debug for OptionAccessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionAccessors")
            .field("has_group", &self.group.is_some())
            .finish_non_exhaustive()
    }
}
