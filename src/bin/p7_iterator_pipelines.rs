//! Pattern 4: Iterator Pipelines, Sequential and Parallel
//! Example: Filter, Map, Match, Count, Reduce
//!
//! Run with: cargo run --bin p7_iterator_pipelines

use itertools::Itertools;

fn sample() -> Vec<&'static str> {
    vec!["ddd2", "aaa2", "bbb1", "aaa1", "bbb3", "ccc", "bbb2", "ddd1"]
}

fn main() {
    let strings = sample();

    println!("=== Filter ===\n");
    strings
        .iter()
        .filter(|s| s.starts_with('a'))
        .for_each(|s| println!("{}", s));

    println!("\n=== Sorted, then Filter ===\n");
    strings
        .iter()
        .sorted()
        .filter(|s| s.starts_with('a'))
        .for_each(|s| println!("{}", s));

    println!("\n=== Map, then Sort ===\n");
    strings
        .iter()
        .map(|s| s.to_uppercase())
        .sorted()
        .for_each(|s| println!("{}", s));

    println!("\n=== Match ===\n");
    let any_starts_with_a = strings.iter().any(|s| s.starts_with('a'));
    println!("any starts with 'a': {}", any_starts_with_a); // true

    println!("\n=== Count ===\n");
    let starts_with_b = strings.iter().filter(|s| s.starts_with('b')).count();
    println!("count starting with 'b': {}", starts_with_b); // 3

    println!("\n=== Reduce ===\n");
    let joined = strings
        .iter()
        .sorted()
        .map(|s| s.to_string())
        .reduce(|a, b| a + "#" + &b);
    if let Some(joined) = joined {
        println!("{}", joined);
    }

    println!("\n=== Key Points ===");
    println!("1. Adapters are lazy; nothing runs until a consumer does");
    println!("2. sorted() (itertools) buffers, then yields in order");
    println!("3. any() short-circuits on the first match");
}
