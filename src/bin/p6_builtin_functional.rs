//! Pattern 3: The Functional Vocabulary
//! Example: Predicates, Functions, Suppliers, Consumers, Comparators, Option
//!
//! Run with: cargo run --bin p6_builtin_functional

use std::cmp::Ordering;

use functional_patterns::person::Person;

/// Negate a predicate. There is no built-in combinator for this; a
/// higher-order function is all it takes.
fn negate<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |t| !pred(t)
}

/// Compose two functions left-to-right.
fn and_then<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

fn main() {
    println!("=== Predicates ===\n");

    let non_empty = |s: &&str| !s.is_empty();
    println!("non_empty(\"foo\"): {}", non_empty(&"foo"));

    let empty = negate(non_empty);
    println!("negated: {}", empty(&"foo"));

    let non_empty_again = negate(empty);
    println!("negated twice: {}", non_empty_again(&"foo"));

    println!("\n=== Functions and Composition ===");

    let to_int = |s: &str| s.parse::<i32>().unwrap_or(0);
    let back_to_string = and_then(to_int, |n| n.to_string());
    println!("round trip of \"123\": {:?}", back_to_string("123"));

    println!("\n=== Suppliers ===");

    // A zero-argument closure produces values on demand.
    let supplier = Person::default;
    let person = supplier();
    println!("supplied: {}", person);
    let person = supplier();
    println!("supplied again: {}", person);

    println!("\n=== Consumers ===");

    let greeter = |p: &Person| println!("Hello {} {}", p.first_name, p.last_name);
    greeter(&Person::new("Peter", "Muster"));

    [Person::new("Alice", "Muster"), Person::new("Bob", "Muster")]
        .iter()
        .for_each(greeter);

    println!("\n=== Comparators ===");

    let by_first = |a: &Person, b: &Person| a.first_name.cmp(&b.first_name);
    let by_last = |a: &Person, b: &Person| a.last_name.cmp(&b.last_name);

    let alice = Person::new("Alice", "Muster");
    let peter = Person::new("Peter", "Muster");
    println!("by_first(Alice, Peter): {:?}", by_first(&alice, &peter)); // Less
    println!("by_last(Muster, Muster): {:?}", by_last(&alice, &peter)); // Equal
    assert_eq!(by_last(&alice, &peter), Ordering::Equal);

    println!("\n=== Option ===");

    let present: Option<&str> = Some("Test");
    println!("is_some: {}", present.is_some());
    println!("value: {}", present.unwrap_or("fallback"));

    let absent: Option<&str> = None;
    println!("fallback: {}", absent.unwrap_or("fallback"));

    // Run code only when a value is there.
    if let Some(s) = present {
        println!("first char: {}", s.chars().next().unwrap_or_default());
    }
    if let Some(c) = present.and_then(|s| s.chars().nth(3)) {
        println!("fourth char: {}", c);
    }

    println!("\n=== Key Points ===");
    println!("1. Predicates, functions, suppliers, consumers: all just Fn shapes");
    println!("2. Combinators are one-line higher-order functions");
    println!("3. Option replaces the null check, with adapters instead of guards");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_negation_restores_the_predicate() {
        let non_empty = |s: &&str| !s.is_empty();
        assert!(non_empty(&"foo"));
        assert!(!negate(non_empty)(&"foo"));
        assert!(negate(negate(non_empty))(&"foo"));
    }

    #[test]
    fn composition_round_trips_a_number() {
        let to_int = |s: &str| s.parse::<i32>().unwrap_or(0);
        let back_to_string = and_then(to_int, |n| n.to_string());
        assert_eq!(back_to_string("123"), "123");
    }

    #[test]
    fn comparators_order_by_field() {
        let by_first = |a: &Person, b: &Person| a.first_name.cmp(&b.first_name);
        let alice = Person::new("Alice", "Muster");
        let peter = Person::new("Peter", "Muster");
        assert_eq!(by_first(&alice, &peter), Ordering::Less);
        assert_eq!(by_first(&peter, &alice), Ordering::Greater);
    }

    #[test]
    fn option_adapters_replace_null_guards() {
        let present: Option<&str> = Some("Test");
        assert_eq!(present.unwrap_or("fallback"), "Test");
        assert_eq!(None::<&str>.unwrap_or("fallback"), "fallback");
        assert_eq!(present.and_then(|s| s.chars().nth(3)), Some('t'));
    }
}
