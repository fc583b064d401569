use std::fmt;
use std::rc::Rc;

use crate::error::{ChangeError, ListenerResult};
use crate::listener::{PropertyChange, PropertyChangeListener};

/// Shared handle to a registered listener.
///
/// Registration identity is the `Rc` allocation: keep a clone of the handle
/// to remove the listener later.
pub type Listener<T> = Rc<dyn PropertyChangeListener<T>>;

/// Wrap a closure into a [`Listener`] handle.
///
/// # Example
///
/// ```
/// use propwatch::{create_listener, ObservableField};
///
/// let mut age = ObservableField::new("age", 34);
/// let listener = create_listener(|change| {
///     println!("{}: {} -> {}", change.property, change.old_value, change.new_value);
///     Ok(())
/// });
/// age.add_listener(listener.clone());
/// age.set(35).unwrap();
/// age.remove_listener(&listener);
/// ```
pub fn create_listener<T, F>(f: F) -> Listener<T>
where
    F: Fn(&PropertyChange<'_, T>) -> ListenerResult + 'static,
{
    Rc::new(f)
}

/// Ordered listener registry with change firing.
///
/// Listeners are called in registration order. The same handle may be
/// registered more than once and is then called once per registration.
pub struct ChangeSupport<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> ChangeSupport<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener.
    pub fn add_listener(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
        tracing::debug!(listeners = self.listeners.len(), "listener added");
    }

    /// Remove the first registration of `listener`.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, listener: &Listener<T>) -> bool {
        let Some(pos) = self
            .listeners
            .iter()
            .position(|registered| Rc::ptr_eq(registered, listener))
        else {
            return false;
        };
        self.listeners.remove(pos);
        tracing::debug!(listeners = self.listeners.len(), "listener removed");
        true
    }

    /// Number of registrations, counting duplicates.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: PartialEq> ChangeSupport<T> {
    /// Deliver `(property, old, new)` to every listener in order.
    ///
    /// Nothing is delivered when `old == new`. The first listener error stops
    /// delivery and is returned.
    pub fn fire(&self, property: &str, old_value: &T, new_value: &T) -> Result<(), ChangeError> {
        if old_value == new_value {
            tracing::trace!(property, "value unchanged, nothing to fire");
            return Ok(());
        }

        tracing::debug!(property, listeners = self.listeners.len(), "firing change");
        let change = PropertyChange::new(property, old_value, new_value);
        for (index, listener) in self.listeners.iter().enumerate() {
            if let Err(source) = listener.property_changed(&change) {
                tracing::warn!(property, index, error = %source, "listener failed");
                return Err(ChangeError::Listener {
                    property: property.to_string(),
                    index,
                    source,
                });
            }
        }
        Ok(())
    }
}

impl<T> Default for ChangeSupport<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeSupport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
