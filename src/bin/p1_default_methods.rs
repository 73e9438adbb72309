//! Pattern 1: Traits with Provided Methods
//! Example: Default Methods
//!
//! Run with: cargo run --bin p1_default_methods

use functional_patterns::formula::Formula;

// An ad-hoc implementation: only `calculate` is written, `sqrt` is inherited
// from the trait and called from inside it.
struct ScaledRoot;

impl Formula for ScaledRoot {
    fn calculate(&self, a: i32) -> f64 {
        self.sqrt(a * 100)
    }
}

// An implementation that overrides the provided method too.
struct Rounded;

impl Formula for Rounded {
    fn calculate(&self, a: i32) -> f64 {
        self.sqrt(a * 100)
    }

    fn sqrt(&self, a: i32) -> f64 {
        f64::from(a).sqrt().round()
    }
}

fn main() {
    println!("=== Traits with Provided Methods ===\n");

    let formula = ScaledRoot;
    println!("calculate(100): {}", formula.calculate(100)); // sqrt(10000) = 100
    println!("sqrt(16): {}", formula.sqrt(16)); // 4

    println!("\n=== Overriding the Provided Method ===");
    let rounded = Rounded;
    println!("rounded calculate(2): {}", rounded.calculate(2)); // sqrt(200) rounded
    println!("rounded sqrt(2): {}", rounded.sqrt(2));

    println!("\n=== Key Points ===");
    println!("1. A provided method gives every implementor a default body");
    println!("2. Required methods can call provided ones through self");
    println!("3. Implementors override the default only when they need to");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_method_reachable_from_required_one() {
        assert_eq!(ScaledRoot.calculate(100), 100.0);
        assert_eq!(ScaledRoot.sqrt(16), 4.0);
    }

    #[test]
    fn override_replaces_the_default() {
        assert_eq!(Rounded.sqrt(2), 1.0);
    }
}
