//! Pattern 5: Dates and Times
//! Example: Odds and Ends
//!
//! Run with: cargo run --bin p11_cores_and_misc

use itertools::Itertools;

use functional_patterns::cores::available_cores;

const NUMBERS: [f64; 11] = [1.0, 24.0, 45.0, 62.0, 85.0, 8.0, 91.0, 3.0, 5.0, 56.0, 9.0];

fn main() {
    println!("=== Processor Count ===\n");
    println!("this machine has {} cores", available_cores());

    println!("\n=== Join ===");
    let names = ["Tom", "Jerry", "Jane", "Jack"];
    let joined = names.iter().map(|n| n.to_uppercase()).join(", ");
    println!("{}", joined); // TOM, JERRY, JANE, JACK

    println!("\n=== Sum ===");
    let total: f64 = NUMBERS.iter().sum();
    println!("total is: {}", total); // 389

    // The same reduction spelled out.
    let total = NUMBERS.iter().fold(0.0, |acc, n| acc + n);
    println!("total is: {}", total);
}
