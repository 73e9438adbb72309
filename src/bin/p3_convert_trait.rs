//! Pattern 2: Closures
//! Example: A Single-Method Conversion Trait
//!
//! Run with: cargo run --bin p3_convert_trait

use functional_patterns::convert::{parse_i64, Convert, TryConvert};

/// The seam: any converter from string to integer fits here.
fn describe(converter: impl Convert<&'static str, i32>, input: &'static str) {
    println!("converted: {}", converter.convert(input));
}

fn main() {
    println!("=== A Single-Method Conversion Trait ===\n");

    // The conversion logic lives entirely at the call site.
    let to_int = |s: &str| s.parse::<i32>().unwrap_or(0);
    describe(to_int, "1234");

    // Any other closure of the same shape drops in.
    describe(|s: &str| s.len() as i32, "1234");

    println!("\n=== Fallible Conversion ===");

    // parse_i64 is a plain function; the blanket impl makes it a TryConvert.
    match parse_i64.try_convert("1234") {
        Ok(n) => println!("parsed: {}", n),
        Err(e) => println!("error: {}", e),
    }

    match parse_i64.try_convert("123abc") {
        Ok(n) => println!("parsed: {}", n),
        Err(e) => println!("error (expected): {}", e),
    }

    println!("\n=== Key Points ===");
    println!("1. One trait method, blanket-implemented over Fn, accepts any closure");
    println!("2. Fallible conversions return Result instead of panicking");
    println!("3. The caller decides what failure means at the call site");
}
