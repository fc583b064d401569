use crate::error::ListenerResult;

/// A single property change, borrowed from the field that fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChange<'a, T> {
    pub property: &'a str,
    pub old_value: &'a T,
    pub new_value: &'a T,
}

impl<'a, T> PropertyChange<'a, T> {
    pub fn new(property: &'a str, old_value: &'a T, new_value: &'a T) -> Self {
        Self {
            property,
            old_value,
            new_value,
        }
    }
}

/// Receives changes from an [`ObservableField`](crate::ObservableField).
///
/// Returning an error stops delivery to the listeners registered after this
/// one and surfaces the error from `set`.
///
/// Any closure of the right shape is a listener:
///
/// ```
/// use propwatch::{ListenerResult, PropertyChange, PropertyChangeListener};
///
/// let listener = |change: &PropertyChange<'_, i32>| -> ListenerResult {
///     println!("{} changed from {} to {}", change.property, change.old_value, change.new_value);
///     Ok(())
/// };
/// listener.property_changed(&PropertyChange::new("age", &34, &35)).unwrap();
/// ```
pub trait PropertyChangeListener<T> {
    fn property_changed(&self, change: &PropertyChange<'_, T>) -> ListenerResult;
}

impl<T, F> PropertyChangeListener<T> for F
where
    F: Fn(&PropertyChange<'_, T>) -> ListenerResult,
{
    fn property_changed(&self, change: &PropertyChange<'_, T>) -> ListenerResult {
        self(change)
    }
}
