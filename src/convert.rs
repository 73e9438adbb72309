//! Single-method conversion seams.
//!
//! `Convert` is the one-method trait shape: a caller supplies the entire
//! conversion as a closure or function item, and anything accepting
//! `impl Convert<F, T>` works with all of them. `TryConvert` is the
//! fallible counterpart for conversions that can reject their input.

use thiserror::Error;

/// Converts a value of one type into another.
///
/// Blanket-implemented for every `Fn(F) -> T`, so closures, function items,
/// and paths like `str::len` all satisfy it without a named impl.
pub trait Convert<F, T> {
    fn convert(&self, from: F) -> T;
}

impl<F, T, C> Convert<F, T> for C
where
    C: Fn(F) -> T,
{
    fn convert(&self, from: F) -> T {
        self(from)
    }
}

/// Fallible conversion. The error type travels with the implementation.
pub trait TryConvert<F, T> {
    type Error;

    fn try_convert(&self, from: F) -> Result<T, Self::Error>;
}

impl<F, T, E, C> TryConvert<F, T> for C
where
    C: Fn(F) -> Result<T, E>,
{
    type Error = E;

    fn try_convert(&self, from: F) -> Result<T, E> {
        self(from)
    }
}

/// Failure modes of the numeric conversions used by the demos.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("empty input")]
    Empty,
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Parse a decimal integer, mapping the stdlib error into [`ConvertError`].
pub fn parse_i64(input: &str) -> Result<i64, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| ConvertError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<F, T>(converter: impl Convert<F, T>, from: F) -> T {
        converter.convert(from)
    }

    #[test]
    fn closure_is_a_converter() {
        let to_int = |s: &str| s.parse::<i32>().unwrap();
        assert_eq!(apply(to_int, "1234"), 1234);
    }

    #[test]
    fn function_item_is_a_converter() {
        assert_eq!(apply(str::len, "hello"), 5);
    }

    #[test]
    fn captured_state_participates() {
        let offset = 5;
        let shifted = move |n: i32| (n + offset).to_string();
        assert_eq!(apply(shifted, 12), "17");
    }

    #[test]
    fn try_convert_surfaces_errors() {
        assert_eq!(parse_i64.try_convert("42"), Ok(42));
        assert_eq!(
            parse_i64.try_convert("forty-two"),
            Err(ConvertError::NotANumber("forty-two".to_string()))
        );
        assert_eq!(parse_i64.try_convert("   "), Err(ConvertError::Empty));
    }
}
