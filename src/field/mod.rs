//! Observable value cells.
//!
//! An [`ObservableField`] owns a value and a [`ChangeSupport`](crate::ChangeSupport)
//! registry, and fires a change to every listener whenever `set` actually
//! changes the value.

mod field;

pub use field::ObservableField;
