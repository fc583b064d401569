//! # Propwatch
//!
//! Observable fields with synchronous property-change listeners.
//!
//! ## Fields (Low-level primitives)
//!
//! - `ObservableField<T>` - A named value that notifies listeners when `set`
//!   changes it
//! - `ChangeSupport<T>` - The ordered listener registry behind a field
//! - `PropertyChangeListener<T>` - Anything that accepts
//!   `(property, old value, new value)`; closures qualify
//!
//! ## Entities
//!
//! Record types compose fields rather than inherit notification behavior.
//! `Person` is the worked example: it validates its name up front and fans
//! listener registration out to its `age` and `salary` fields.
//!
//! Everything is single-threaded. Listeners are held in `Rc`, and a listener
//! error aborts the remaining notifications and is returned from `set`.

pub mod error;
pub mod field;
mod listener;
pub mod person;
mod support;

// Re-export main types for convenience
pub use error::{ChangeError, ListenerError, ListenerResult, ValidationError};
pub use field::ObservableField;
pub use listener::{PropertyChange, PropertyChangeListener};
pub use person::Person;
pub use support::{create_listener, ChangeSupport, Listener};
