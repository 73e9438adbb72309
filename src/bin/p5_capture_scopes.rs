//! Pattern 2: Closures
//! Example: Capture Scopes
//!
//! Run with: cargo run --bin p5_capture_scopes

use functional_patterns::convert::Convert;

fn main() {
    println!("=== Capturing by Reference ===\n");

    // The closure borrows num; it stays usable afterwards.
    let num = 5;
    let stringify = |from: i32| (from + num).to_string();
    println!("converted: {}", stringify.convert(12)); // "17"
    println!("num is still here: {}", num);

    println!("\n=== Capturing by Move ===");

    // move transfers ownership into the closure. Needed whenever the
    // closure outlives the scope that owns the captured value.
    let label = String::from("value");
    let tag = move |n: i32| format!("{}-{}", label, n);
    println!("tagged: {}", tag(1));
    println!("tagged: {}", tag(2));
    // label is gone from this scope; tag owns it now.

    println!("\n=== Mutable State: FnMut ===");

    let mut calls = 0;
    let mut counting = |from: i32| {
        calls += 1;
        (from + calls).to_string()
    };
    println!("first:  {}", counting(10)); // 11
    println!("second: {}", counting(10)); // 12
    drop(counting);
    println!("calls observed: {}", calls);

    println!("\n=== What the Borrow Checker Enforces ===");
    println!("A captured variable cannot be mutated elsewhere while a");
    println!("borrowing closure is alive. Instead of freezing captures");
    println!("forever, the compiler scopes the freeze to the closure's");
    println!("lifetime:");

    let mut threshold = 3;
    let over = |n: i32| n > threshold; // immutable borrow of threshold
    println!("over(5): {}", over(5));
    // The borrow ends with the last use of `over`; now mutation is fine.
    threshold = 10;
    println!("threshold after the closure is done: {}", threshold);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_capture_participates_in_conversion() {
        let num = 5;
        let stringify = |from: i32| (from + num).to_string();
        assert_eq!(stringify.convert(12), "17");
    }

    #[test]
    fn moved_capture_is_owned_by_the_closure() {
        let label = String::from("value");
        let tag = move |n: i32| format!("{}-{}", label, n);
        assert_eq!(tag(7), "value-7");
    }

    #[test]
    fn fnmut_accumulates_between_calls() {
        let mut calls = 0;
        let mut counting = |from: i32| {
            calls += 1;
            from + calls
        };
        assert_eq!(counting(10), 11);
        assert_eq!(counting(10), 12);
    }
}
