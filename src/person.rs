//! A two-field value holder constructed through function values.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

static DEFAULT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// A name: two string fields, set once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Construct with generated placeholder names.
    ///
    /// Each call takes the next value of a process-wide counter, so two
    /// defaulted holders never share a name. The counter is relaxed-atomic;
    /// callers must not rely on absolute values, only on distinctness.
    pub fn with_default_names() -> Self {
        let n = DEFAULT_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
        Person {
            first_name: format!("default firstName {}", n),
            last_name: format!("default lastName {}", n),
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::with_default_names()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Builds a [`Person`] from two string slices.
///
/// Blanket-implemented for `Fn(&str, &str) -> Person`, so `Person::new`
/// itself is a factory.
pub trait PersonFactory {
    fn create(&self, first_name: &str, last_name: &str) -> Person;
}

impl<C> PersonFactory for C
where
    C: Fn(&str, &str) -> Person,
{
    fn create(&self, first_name: &str, last_name: &str) -> Person {
        self(first_name, last_name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePersonError {
    #[error("empty name")]
    Empty,
    #[error("missing last name in {0:?}")]
    MissingLastName(String),
}

impl FromStr for Person {
    type Err = ParsePersonError;

    /// Parses `"First Last"`. Extra interior whitespace is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let first = parts.next().ok_or(ParsePersonError::Empty)?;
        let last = parts
            .next()
            .ok_or_else(|| ParsePersonError::MissingLastName(s.to_string()))?;
        Ok(Person::new(first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_set_at_construction() {
        let person = Person::new("Kim", "Jong");
        assert_eq!(person.first_name, "Kim");
        assert_eq!(person.last_name, "Jong");
    }

    #[test]
    fn constructor_works_as_factory() {
        fn build(factory: impl PersonFactory) -> Person {
            factory.create("Kim", "Jong")
        }

        let person = build(Person::new);
        assert_eq!(person, Person::new("Kim", "Jong"));

        // A closure works at the same seam.
        let shouting = build(|f: &str, l: &str| Person::new(&f.to_uppercase(), &l.to_uppercase()));
        assert_eq!(shouting, Person::new("KIM", "JONG"));
    }

    #[test]
    fn defaulted_names_are_distinct() {
        let a = Person::default();
        let b = Person::default();
        assert_ne!(a.first_name, b.first_name);
        assert!(a.first_name.starts_with("default firstName "));
        assert!(b.last_name.starts_with("default lastName "));
    }

    #[test]
    fn parses_first_and_last() {
        let person: Person = "Peter Muster".parse().unwrap();
        assert_eq!(person, Person::new("Peter", "Muster"));
    }

    #[test]
    fn rejects_incomplete_names() {
        assert_eq!("".parse::<Person>(), Err(ParsePersonError::Empty));
        assert_eq!(
            "Peter".parse::<Person>(),
            Err(ParsePersonError::MissingLastName("Peter".to_string()))
        );
    }
}
