//! Pattern 2: Closures
//! Example: Closure Forms
//!
//! Run with: cargo run --bin p2_closures

use std::cmp::Reverse;

fn main() {
    println!("=== Sorting with Closures ===\n");

    let mut names = vec!["a", "b", "c", "d"];

    // Fully annotated, block body.
    names.sort_by(|a: &&str, b: &&str| -> std::cmp::Ordering { b.cmp(a) });

    // Annotated, expression body.
    names.sort_by(|a: &&str, b: &&str| b.cmp(a));

    // Everything inferred. This is the form you will actually write.
    names.sort_by(|a, b| b.cmp(a));

    println!("reverse sorted: {:?}", names); // ["d", "c", "b", "a"]

    println!("\n=== The Same Sort, Other Ways ===");

    let mut names = vec!["a", "b", "c", "d"];
    names.sort_by_key(|&s| Reverse(s));
    println!("sort_by_key(Reverse): {:?}", names);

    let mut names = vec!["a", "b", "c", "d"];
    names.sort_unstable();
    names.reverse();
    println!("sort then reverse:   {:?}", names);
}

#[cfg(test)]
mod tests {
    #[test]
    fn reverse_lexical_sort() {
        let mut names = vec!["a", "b", "c", "d"];
        names.sort_by(|a, b| b.cmp(a));
        assert_eq!(names, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn sort_variants_agree() {
        let mut by_comparator = vec!["b", "d", "a", "c"];
        by_comparator.sort_by(|a, b| b.cmp(a));

        let mut by_key = vec!["b", "d", "a", "c"];
        by_key.sort_by_key(|&s| std::cmp::Reverse(s));

        assert_eq!(by_comparator, by_key);
    }
}
