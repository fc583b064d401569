//! Person example with property-change listeners
//!
//! Run with `RUST_LOG=propwatch=debug cargo run --example person` to see the
//! library's own events.

use propwatch::{create_listener, Person};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Person Example ===\n");

    // Validation happens before any field exists
    if let Err(err) = Person::new("", 0, 0) {
        println!("Rejected: {err}\n");
    }

    let mut person = Person::new("Dmitry", 34, 2000)?;

    let listener = create_listener(|change| {
        println!(
            "Property {} changed from {} to {}",
            change.property, change.old_value, change.new_value
        );
        Ok(())
    });
    person.add_property_change_listener(listener.clone());

    println!("Birthday...");
    person.set_age(35)?;

    println!("\nSame age again (no notification)...");
    person.set_age(35)?;

    println!("\nRaise...");
    person.set_salary(2100)?;

    person.remove_property_change_listener(&listener);
    println!("\nAfter removing the listener...");
    person.set_age(40)?;

    println!("\nFinal state: {person:#?}");
    Ok(())
}
