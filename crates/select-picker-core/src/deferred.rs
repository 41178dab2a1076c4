//! Values that may arrive later.
//!
//! A [`Deferred<T>`] is either already resolved or still pending. The
//! matching [`Resolver<T>`] supplies the value; every resolution is stored
//! and broadcast to subscribers through an internal [`Signal`]. A deferred
//! value can be resolved more than once: the latest resolution wins and
//! earlier subscribers see each one in turn.
//!
//! # Example
//!
//! ```
//! use select_picker_core::Deferred;
//!
//! let (content, resolver) = Deferred::<Vec<&'static str>>::pending();
//! assert!(content.is_pending());
//!
//! content.on_resolved(|items| println!("{} items arrived", items.len()));
//! resolver.resolve(vec!["Apple", "Banana"]);
//!
//! assert_eq!(content.get(), Some(vec!["Apple", "Banana"]));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;
use crate::signal::{ConnectionId, Signal};

/// Snapshot of a deferred value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredState<T> {
    /// No value has been supplied yet.
    Pending,
    /// The most recently supplied value.
    Ready(T),
}

impl<T> DeferredState<T> {
    /// Returns true while no value has been supplied.
    pub fn is_pending(&self) -> bool {
        matches!(self, DeferredState::Pending)
    }

    /// Returns the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            DeferredState::Ready(value) => Some(value),
            DeferredState::Pending => None,
        }
    }
}

struct Shared<T> {
    value: RwLock<Option<T>>,
    resolved: Signal<T>,
}

/// A value that is either available now or will be supplied later.
///
/// Cloning a `Deferred` yields another handle onto the same value.
pub struct Deferred<T> {
    shared: Arc<Shared<T>>,
}

/// The write side of a pending [`Deferred`].
#[derive(Clone)]
pub struct Resolver<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Deferred<T> {
    /// Create a pending value and the resolver that completes it.
    pub fn pending() -> (Self, Resolver<T>) {
        let shared = Arc::new(Shared {
            value: RwLock::new(None),
            resolved: Signal::new(),
        });
        (
            Self {
                shared: shared.clone(),
            },
            Resolver { shared },
        )
    }

    /// Create an already resolved value.
    pub fn ready(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(Some(value)),
                resolved: Signal::new(),
            }),
        }
    }

    /// Resolve with the output of `future` once it completes.
    ///
    /// The future is spawned on the current tokio runtime; this must be
    /// called from within one.
    #[cfg(feature = "tokio")]
    pub fn from_future<F>(future: F) -> Self
    where
        F: std::future::Future<Output = T> + Send + 'static,
    {
        let (deferred, resolver) = Self::pending();
        tokio::spawn(async move {
            let value = future.await;
            resolver.resolve(value);
        });
        deferred
    }

    /// Returns true while no value has been supplied.
    pub fn is_pending(&self) -> bool {
        self.shared.value.read().is_none()
    }

    /// The current value, if resolved.
    pub fn get(&self) -> Option<T> {
        self.shared.value.read().clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DeferredState<T> {
        match self.get() {
            Some(value) => DeferredState::Ready(value),
            None => DeferredState::Pending,
        }
    }

    /// Subscribe to resolutions.
    ///
    /// If a value is already present, `slot` is invoked with it immediately.
    /// A resolution racing with this call on another thread may be delivered
    /// twice.
    pub fn on_resolved<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let slot = Arc::new(slot);
        let connected = slot.clone();
        let id = self.shared.resolved.connect(move |value| connected(value));

        let current = self.get();
        if let Some(value) = current {
            slot(&value);
        }
        id
    }

    /// Remove a subscription made with [`on_resolved`](Self::on_resolved).
    pub fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.shared.resolved.disconnect(id)
    }
}

impl<T: Clone + Send + Sync + 'static> Resolver<T> {
    /// Supply the value and notify subscribers.
    pub fn resolve(&self, value: T) {
        *self.shared.value.write() = Some(value.clone());
        tracing::debug!(
            target: targets::DEFERRED,
            subscribers = self.shared.resolved.connection_count(),
            "deferred value resolved"
        );
        self.shared.resolved.emit(value);
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Self::ready(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("value", &*self.shared.value.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(Deferred<Vec<String>>: Send, Sync);
static_assertions::assert_impl_all!(Resolver<Vec<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_ready_value() {
        let deferred = Deferred::ready(7);
        assert!(!deferred.is_pending());
        assert_eq!(deferred.state(), DeferredState::Ready(7));
    }

    #[test]
    fn test_pending_then_resolved() {
        let (deferred, resolver) = Deferred::<String>::pending();
        assert!(deferred.is_pending());
        assert_eq!(deferred.state(), DeferredState::Pending);

        resolver.resolve("done".to_string());
        assert_eq!(deferred.get().as_deref(), Some("done"));
    }

    #[test]
    fn test_subscriber_sees_each_resolution() {
        let (deferred, resolver) = Deferred::<u32>::pending();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        deferred.on_resolved(move |&v| seen_clone.lock().push(v));

        resolver.resolve(1);
        resolver.resolve(2);

        assert_eq!(*seen.lock(), vec![1, 2]);
        assert_eq!(deferred.get(), Some(2));
    }

    #[test]
    fn test_late_subscriber_called_immediately() {
        let deferred = Deferred::from(vec!["a"]);
        let seen = Arc::new(Mutex::new(None));

        let seen_clone = seen.clone();
        deferred.on_resolved(move |v| *seen_clone.lock() = Some(v.clone()));

        assert_eq!(*seen.lock(), Some(vec!["a"]));
    }

    #[test]
    fn test_unsubscribe() {
        let (deferred, resolver) = Deferred::<u32>::pending();
        let seen = Arc::new(Mutex::new(0));

        let seen_clone = seen.clone();
        let id = deferred.on_resolved(move |_| *seen_clone.lock() += 1);
        assert!(deferred.unsubscribe(id));

        resolver.resolve(3);
        assert_eq!(*seen.lock(), 0);
    }

    #[test]
    fn test_resolve_from_other_thread() {
        let (deferred, resolver) = Deferred::<u32>::pending();
        std::thread::spawn(move || resolver.resolve(99))
            .join()
            .unwrap();
        assert_eq!(deferred.get(), Some(99));
    }
}
