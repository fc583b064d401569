use std::fmt;
use std::mem;

use crate::error::ChangeError;
use crate::support::{ChangeSupport, Listener};

/// A named value that notifies listeners when it changes.
///
/// Notification is synchronous: `set` returns only after every listener has
/// run, or after the first one that failed.
///
/// # Examples
///
/// ```
/// use propwatch::{create_listener, ObservableField};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut age = ObservableField::new("age", 34);
///
/// let sink = Rc::clone(&seen);
/// let listener = create_listener(move |change| {
///     sink.borrow_mut().push((*change.old_value, *change.new_value));
///     Ok(())
/// });
/// age.add_listener(listener.clone());
///
/// age.set(35).unwrap();
/// age.set(35).unwrap();
/// assert_eq!(*seen.borrow(), vec![(34, 35)]);
///
/// age.remove_listener(&listener);
/// age.set(40).unwrap();
/// assert_eq!(seen.borrow().len(), 1);
/// assert_eq!(age.get(), 40);
/// ```
pub struct ObservableField<T> {
    name: String,
    value: T,
    support: ChangeSupport<T>,
}

impl<T> ObservableField<T> {
    /// Create a field with the given property name and initial value.
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self {
            name: name.into(),
            value: initial,
            support: ChangeSupport::new(),
        }
    }

    /// Property name passed to listeners.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }

    /// Register a listener. The same handle may be added more than once.
    pub fn add_listener(&mut self, listener: Listener<T>) {
        self.support.add_listener(listener);
    }

    /// Remove the first registration of `listener`, if any.
    pub fn remove_listener(&mut self, listener: &Listener<T>) -> bool {
        self.support.remove_listener(listener)
    }

    /// Number of registrations, counting duplicates.
    pub fn listener_count(&self) -> usize {
        self.support.listener_count()
    }

    /// Whether any listener is registered.
    pub fn has_listeners(&self) -> bool {
        !self.support.is_empty()
    }

    /// Consume the field, dropping its listeners.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> ObservableField<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

impl<T: PartialEq> ObservableField<T> {
    /// Store `new_value` and notify listeners if it differs from the current one.
    ///
    /// The value is stored before any listener runs, so it stays updated
    /// even when a listener fails and its error is returned here.
    pub fn set(&mut self, new_value: T) -> Result<(), ChangeError> {
        if self.value == new_value {
            tracing::trace!(property = %self.name, "set to current value ignored");
            return Ok(());
        }
        let old_value = mem::replace(&mut self.value, new_value);
        self.support.fire(&self.name, &old_value, &self.value)
    }
}

impl<T: Clone + PartialEq> ObservableField<T> {
    /// Update the value using a function.
    ///
    /// The edit is made on a copy and then passed to [`set`](Self::set).
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> Result<(), ChangeError> {
        let mut next = self.value.clone();
        f(&mut next);
        self.set(next)
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableField")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("listeners", &self.support.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::create_listener;
    use std::cell::RefCell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(String, i32, i32)>>>;

    fn recording(log: &Log) -> Listener<i32> {
        let log = Rc::clone(log);
        create_listener(move |change| {
            log.borrow_mut().push((
                change.property.to_string(),
                *change.old_value,
                *change.new_value,
            ));
            Ok(())
        })
    }

    #[test]
    fn set_then_get() {
        let mut field = ObservableField::new("age", 0);
        field.set(42).unwrap();
        assert_eq!(field.get(), 42);
        assert_eq!(field.with(|v| v * 2), 84);
    }

    #[test]
    fn age_scenario() {
        let log: Log = Rc::default();
        let mut age = ObservableField::new("age", 34);
        let listener = recording(&log);
        age.add_listener(listener.clone());

        age.set(35).unwrap();
        assert_eq!(*log.borrow(), vec![("age".to_string(), 34, 35)]);

        age.set(35).unwrap();
        assert_eq!(log.borrow().len(), 1);

        assert!(age.remove_listener(&listener));
        age.set(40).unwrap();
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(age.get(), 40);
    }

    #[test]
    fn update_routes_through_set() {
        let log: Log = Rc::default();
        let mut salary = ObservableField::new("salary", 2000);
        salary.add_listener(recording(&log));

        salary.update(|s| *s += 500).unwrap();
        salary.update(|_| {}).unwrap();

        assert_eq!(salary.get(), 2500);
        assert_eq!(*log.borrow(), vec![("salary".to_string(), 2000, 2500)]);
    }

    #[test]
    fn failing_listener_keeps_new_value() {
        let log: Log = Rc::default();
        let mut age = ObservableField::new("age", 1);
        age.add_listener(create_listener(|_| Err("no".into())));
        age.add_listener(recording(&log));

        let err = age.set(2).unwrap_err();
        assert_eq!(err.index(), 0);
        assert_eq!(err.property(), "age");
        assert_eq!(age.get(), 2);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn panicking_listener_unwinds_through_set() {
        let log: Log = Rc::default();
        let mut age = ObservableField::new("age", 1);
        age.add_listener(create_listener(|_| panic!("listener panicked")));
        age.add_listener(recording(&log));

        let result = panic::catch_unwind(AssertUnwindSafe(|| age.set(2)));

        assert!(result.is_err());
        assert_eq!(age.get(), 2);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn debug_shows_listener_count() {
        let mut field = ObservableField::new("age", 7);
        field.add_listener(create_listener(|_| Ok(())));
        assert!(field.has_listeners());
        assert_eq!(
            format!("{field:?}"),
            r#"ObservableField { name: "age", value: 7, listeners: 1 }"#
        );
        assert_eq!(field.into_inner(), 7);
    }
}
