//! Pattern 4: Iterator Pipelines, Sequential and Parallel
//! Example: Map Utilities via the Entry API
//!
//! Run with: cargo run --bin p9_hashmap_entry

use std::collections::HashMap;

fn build_map() -> HashMap<i32, String> {
    let mut map = HashMap::new();
    for i in 0..10 {
        // Insert only when the key is vacant.
        map.entry(i).or_insert_with(|| format!("val{}", i));
    }
    map
}

fn main() {
    println!("=== Populating with the Entry API ===\n");

    let mut map = build_map();
    // HashMap iteration order is unspecified; sort keys for stable output.
    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort_unstable();
    for key in &keys {
        println!("{}", map[key]);
    }

    println!("\n=== Compute on a Present Key ===");

    // Append the key to the value, only if the key exists.
    map.entry(3).and_modify(|val| *val += "3");
    println!("map[3]: {}", map[&3]); // val33

    // A vacant key stays vacant.
    map.entry(42).and_modify(|val| *val += "42");
    println!("map contains 42: {}", map.contains_key(&42));

    println!("\n=== Key Points ===");
    println!("1. entry().or_insert_with() is insert-if-absent in one lookup");
    println!("2. and_modify() is compute-if-present");
    println!("3. Iteration order is unspecified; sort keys when it matters");
}
