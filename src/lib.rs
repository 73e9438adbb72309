//! # Functional Patterns
//!
//! Worked examples of Rust's functional language features: traits with
//! provided methods, closures and capture rules, function values at trait
//! seams, iterator pipelines, parallel iteration with Rayon, the `HashMap`
//! entry API, and the `chrono` date/time types.
//!
//! The library half of the crate holds the small supporting definitions the
//! demos share:
//!
//! - [`formula::Formula`] - a trait with a provided method
//! - [`convert::Convert`] / [`convert::TryConvert`] - single-method
//!   conversion seams any closure can satisfy
//! - [`person::Person`] / [`person::PersonFactory`] - a two-field value
//!   holder constructed through function values
//! - [`cores::available_cores`] - logical CPU count of the host
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Traits with Provided Methods
//! cargo run --bin p1_default_methods
//!
//! # Pattern 2: Closures
//! cargo run --bin p2_closures
//! cargo run --bin p3_convert_trait
//! cargo run --bin p4_fn_references
//! cargo run --bin p5_capture_scopes
//!
//! # Pattern 3: The Functional Vocabulary
//! cargo run --bin p6_builtin_functional
//!
//! # Pattern 4: Iterator Pipelines, Sequential and Parallel
//! cargo run --bin p7_iterator_pipelines
//! cargo run --bin p8_parallel_sort
//! cargo run --bin p9_hashmap_entry
//!
//! # Pattern 5: Dates and Times
//! cargo run --bin p10_datetime
//! cargo run --bin p11_cores_and_misc
//! ```

pub mod convert;
pub mod cores;
pub mod formula;
pub mod person;
