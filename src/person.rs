//! A record type composed from observable fields.

use crate::error::{require_non_empty, ChangeError, ValidationError};
use crate::field::ObservableField;
use crate::support::Listener;

/// A person whose age and salary can be observed.
///
/// Listeners registered on the person are registered on each of its
/// fields, so one listener sees changes to every property.
///
/// # Examples
///
/// ```
/// use propwatch::{create_listener, Person};
///
/// let mut person = Person::new("Dmitry", 34, 2000).unwrap();
/// person.add_property_change_listener(create_listener(|change| {
///     println!("Property {} changed from {} to {}", change.property, change.old_value, change.new_value);
///     Ok(())
/// }));
/// person.set_age(35).unwrap();
/// person.set_salary(2100).unwrap();
/// ```
#[derive(Debug)]
pub struct Person {
    name: String,
    age: ObservableField<i32>,
    salary: ObservableField<i32>,
}

impl Person {
    /// Create a person, rejecting an empty name.
    pub fn new(name: impl Into<String>, age: i32, salary: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty(&name, "person", "Name")?;
        Ok(Self {
            name,
            age: ObservableField::new("age", age),
            salary: ObservableField::new("salary", salary),
        })
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current age.
    pub fn age(&self) -> i32 {
        self.age.get()
    }

    /// Current salary.
    pub fn salary(&self) -> i32 {
        self.salary.get()
    }

    /// Set the age, notifying listeners of `"age"` if it changed.
    pub fn set_age(&mut self, age: i32) -> Result<(), ChangeError> {
        self.age.set(age)
    }

    /// Set the salary, notifying listeners of `"salary"` if it changed.
    pub fn set_salary(&mut self, salary: i32) -> Result<(), ChangeError> {
        self.salary.set(salary)
    }

    fn fields_mut(&mut self) -> [&mut ObservableField<i32>; 2] {
        [&mut self.age, &mut self.salary]
    }

    /// Register `listener` on every observable property.
    pub fn add_property_change_listener(&mut self, listener: Listener<i32>) {
        for field in self.fields_mut() {
            field.add_listener(listener.clone());
        }
    }

    /// Remove one registration of `listener` from every observable property.
    ///
    /// Returns `true` if any property had it registered.
    pub fn remove_property_change_listener(&mut self, listener: &Listener<i32>) -> bool {
        let mut removed = false;
        for field in self.fields_mut() {
            removed |= field.remove_listener(listener);
        }
        removed
    }
}
