//! Pattern 2: Closures
//! Example: Functions and Constructors as Values
//!
//! Run with: cargo run --bin p4_fn_references

use functional_patterns::convert::{Convert, TryConvert};
use functional_patterns::person::{Person, PersonFactory};

/// Extracts the leading word of a phrase.
struct Prefixer {
    length: usize,
}

impl Prefixer {
    fn prefix(&self, phrase: &str) -> String {
        phrase.chars().take(self.length).collect()
    }
}

fn build(factory: impl PersonFactory) -> Person {
    factory.create("Kim", "Jong")
}

fn main() {
    println!("=== Functions as Values ===\n");

    // A path to an inherent method is a converter as-is.
    let to_float = str::parse::<f64>;
    match to_float.try_convert("1234.1234") {
        Ok(f) => println!("converted: {}", f),
        Err(e) => println!("error: {}", e),
    }

    println!("\n=== Bound Methods ===");

    // Capturing a value binds its method the way an object reference would.
    let prefixer = Prefixer { length: 4 };
    let take_prefix = |s: &str| prefixer.prefix(s);
    println!("converted: {}", take_prefix.convert("Rust Developers"));

    println!("\n=== Constructors as Factories ===");

    // Person::new is a plain function value, so it satisfies PersonFactory.
    let person = build(Person::new);
    println!("person.first_name: {}", person.first_name);
    println!("person.last_name: {}", person.last_name);

    println!("\n=== Key Points ===");
    println!("1. fn items and method paths are first-class values");
    println!("2. Capturing a receiver turns a method into a closure");
    println!("3. A constructor passed by name is already a factory");
}
