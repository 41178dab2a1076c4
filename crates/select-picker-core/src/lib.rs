//! Core reactive primitives for the select picker view model.
//!
//! This crate provides the small reactive toolkit the picker is built on:
//!
//! - **Property System**: values with change detection ([`Property`])
//! - **Bindings**: derived values memoized until invalidated ([`Binding`])
//! - **Signal/Slot System**: change notification ([`Signal`])
//! - **Deferred Values**: inputs that resolve later ([`Deferred`])
//! - **Logging**: `tracing` targets, span names and a timing guard
//!
//! There is no implicit dependency tracking. The owner of a property
//! invalidates the bindings derived from it and emits the matching signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use select_picker_core::{Binding, Property, Signal};
//!
//! let items = Arc::new(Property::new(vec!["Apple", "Banana"]));
//! let source = items.clone();
//! let count = Binding::new(move || source.with(|v| v.len()));
//! let count_changed = Signal::<usize>::new();
//!
//! count_changed.connect(|n| println!("now {n} items"));
//!
//! if items.set(vec!["Apple"]) {
//!     count.invalidate();
//!     count_changed.emit(count.get());
//! }
//! assert_eq!(count.get(), 1);
//! ```

pub mod deferred;
pub mod logging;
pub mod property;
pub mod signal;

pub use deferred::{Deferred, DeferredState, Resolver};
pub use logging::PerfSpan;
pub use property::{Binding, Property};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
