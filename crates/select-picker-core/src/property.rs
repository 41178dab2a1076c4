//! Observable values and memoized derivations.
//!
//! A [`Property`] holds one input of the picker (its content, its filter...)
//! and reports whether a write actually changed anything. A [`Binding`]
//! caches a value computed from properties until it is invalidated.
//!
//! Properties do not know their dependents. Whoever owns both a property
//! and the bindings derived from it invalidates those bindings when
//! [`Property::set`] reports a change, then emits the matching signal.
//!
//! # Example
//!
//! ```
//! use select_picker_core::{Property, Signal};
//!
//! struct Filter {
//!     text: Property<Option<String>>,
//!     text_changed: Signal<Option<String>>,
//! }
//!
//! impl Filter {
//!     fn set_text(&self, text: Option<String>) {
//!         if self.text.set(text.clone()) {
//!             self.text_changed.emit(text);
//!         }
//!     }
//! }
//!
//! let filter = Filter { text: Property::new(None), text_changed: Signal::new() };
//! filter.set_text(Some("an".into()));
//! assert_eq!(filter.text.get().as_deref(), Some("an"));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::logging::targets;

/// A value behind a lock, with equality-based change detection.
///
/// `Send + Sync` whenever `T` is, so a deferred input may be written from
/// the thread that resolved it.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the value for the duration of `f`.
    ///
    /// `f` runs under the read lock and must not write this property.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Mutate the value in place under the write lock.
    ///
    /// There is no comparison; callers treat every update as a change.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.value.write())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value` if it differs from the current one.
    ///
    /// Returns whether the stored value changed.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Store `value` if it differs, handing back the previous value.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current == value {
            return None;
        }
        tracing::trace!(target: targets::PROPERTY, "property changed");
        Some(std::mem::replace(&mut *current, value))
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value.read(), f)
    }
}

/// A derived value, recomputed lazily after [`invalidate`](Self::invalidate).
///
/// Each computation bumps a generation counter, so callers can tell whether
/// two reads were served by the same computation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use select_picker_core::{Binding, Property};
///
/// let labels = Arc::new(Property::new(vec!["Apple", "Banana"]));
/// let source = labels.clone();
/// let longest = Binding::new(move || {
///     source.with(|l| l.iter().map(|s| s.len()).max().unwrap_or(0))
/// });
///
/// assert_eq!(longest.get(), 6);
///
/// labels.set(vec!["Fig"]);
/// longest.invalidate();
/// assert_eq!(longest.get(), 3);
/// ```
pub struct Binding<T> {
    compute: Box<dyn Fn() -> T + Send + Sync>,
    cached: RwLock<Option<T>>,
    dirty: AtomicBool,
    generation: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// A binding over `compute`. Nothing runs until the first read.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cached: RwLock::new(None),
            dirty: AtomicBool::new(true),
            generation: AtomicU64::new(0),
        }
    }

    /// The cached value, computed first if the binding is dirty.
    pub fn get(&self) -> T {
        if !self.dirty.load(Ordering::Acquire) {
            if let Some(value) = self.cached.read().as_ref() {
                return value.clone();
            }
        }

        // Cleared before computing so an invalidation that races with the
        // computation is not lost.
        self.dirty.store(false, Ordering::Release);
        let value = (self.compute)();
        *self.cached.write() = Some(value.clone());
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!(target: targets::PROPERTY, generation, "binding recomputed");
        value
    }

    /// Drop the cached value at the next read.
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Whether the next read will recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// How many times the value has been computed.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("dirty", &self.dirty.load(Ordering::Acquire))
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Property<Vec<String>>: Send, Sync);
static_assertions::assert_impl_all!(Binding<Vec<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_set_ignores_equal_value() {
        let filter = Property::new(Some("an".to_string()));

        assert!(!filter.set(Some("an".to_string())));
        assert!(filter.set(None));
        assert_eq!(filter.get(), None);
    }

    #[test]
    fn test_replace_returns_previous() {
        let open = Property::new(false);

        assert_eq!(open.replace(false), None);
        assert_eq!(open.replace(true), Some(false));
        assert!(open.get());
    }

    #[test]
    fn test_with_and_update() {
        let content = Property::new(vec!["Apple", "Banana"]);

        assert_eq!(content.with(Vec::len), 2);
        let len = content.update(|items| {
            items.push("Carrot");
            items.len()
        });
        assert_eq!(len, 3);
        assert_eq!(content.get(), vec!["Apple", "Banana", "Carrot"]);
    }

    #[test]
    fn test_debug_shows_value() {
        let filter: Property<Option<String>> = Property::default();
        assert_eq!(format!("{filter:?}"), "None");
    }

    #[test]
    fn test_binding_is_lazy_and_cached() {
        let computations = Arc::new(AtomicUsize::new(0));
        let counter = computations.clone();
        let rows = Binding::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec!["Apple"]
        });

        assert!(rows.is_dirty());
        assert_eq!(computations.load(Ordering::SeqCst), 0);

        rows.get();
        rows.get();
        assert_eq!(computations.load(Ordering::SeqCst), 1);
        assert_eq!(rows.generation(), 1);

        rows.invalidate();
        rows.get();
        assert_eq!(computations.load(Ordering::SeqCst), 2);
        assert_eq!(rows.generation(), 2);
    }

    #[test]
    fn test_binding_is_stale_until_invalidated() {
        let content = Arc::new(Property::new(vec!["Apple", "Banana"]));
        let source = content.clone();
        let count = Binding::new(move || source.with(Vec::len));

        assert_eq!(count.get(), 2);

        content.set(vec!["Apple"]);
        assert_eq!(count.get(), 2);

        count.invalidate();
        assert_eq!(count.get(), 1);
        assert!(!count.is_dirty());
    }
}
