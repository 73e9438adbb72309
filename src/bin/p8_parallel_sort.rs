//! Pattern 4: Iterator Pipelines, Sequential and Parallel
//! Example: Sequential vs Parallel Sort
//!
//! Run with: cargo run --bin p8_parallel_sort

use std::time::Instant;

use rayon::prelude::*;
use uuid::Uuid;

use functional_patterns::cores::available_cores;

/// Sort a vector on one core.
fn sequential_sort(mut data: Vec<String>) -> Vec<String> {
    data.sort_unstable();
    data
}

/// Sort a vector across the Rayon thread pool.
fn parallel_sort(mut data: Vec<String>) -> Vec<String> {
    data.par_sort_unstable();
    data
}

fn main() {
    println!("=== Sequential vs Parallel Sort ===\n");
    println!("cores available: {}", available_cores());

    // A large list of unique random identifiers.
    let max = 1_000_000;
    let values: Vec<String> = (0..max).map(|_| Uuid::new_v4().to_string()).collect();

    println!("\n=== Sequential Sort ===");
    let start = Instant::now();
    let seq_sorted = sequential_sort(values.clone());
    let seq_time = start.elapsed();
    println!("count: {}", seq_sorted.len());
    println!("sequential sort took: {} ms", seq_time.as_millis());

    println!("\n=== Parallel Sort ===");
    let start = Instant::now();
    let par_sorted = parallel_sort(values);
    let par_time = start.elapsed();
    println!("count: {}", par_sorted.len());
    println!("parallel sort took: {} ms", par_time.as_millis());

    // Same input, same order out.
    assert_eq!(seq_sorted, par_sorted);
    println!(
        "\nspeedup: {:.2}x",
        seq_time.as_secs_f64() / par_time.as_secs_f64()
    );

    println!("\n=== Key Points ===");
    println!("1. par_sort_unstable() is a drop-in for sort_unstable()");
    println!("2. No shared mutable state: each sort owns its vector");
    println!("3. Timings are illustrative; speedup tracks core count");
}
