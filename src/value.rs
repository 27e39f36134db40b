//! Scalar value codec.
//!
//! Every value stored in a data file is text. This module provides the
//! [`Scalar`] trait, which converts between that canonical text and typed
//! Rust values:
//!
//! | Type | Written as | Read from |
//! |------|------------|-----------|
//! | Integers | decimal digits, optional `-` | the same, surrounding whitespace ignored |
//! | Decimals | shortest round-trip decimal text | any text `f64` parses |
//! | `bool` | `1` or `0` | any integer, non-zero meaning `true` |
//! | `String` | verbatim | verbatim |
//!
//! Formatting is locale independent.
//!
//! ## Examples
//!
//! ```rust
//! use datafile::Scalar;
//!
//! assert_eq!(42i64.to_text(), "42");
//! assert_eq!(true.to_text(), "1");
//! assert_eq!(i64::from_text(" -7 ").unwrap(), -7);
//! assert!(bool::from_text("2").unwrap());
//! assert!(i64::from_text("twelve").is_err());
//! ```

use crate::{Error, Result};

/// A type that can be stored as a data file value.
pub trait Scalar: Sized {
    /// Renders the value as its canonical text.
    fn to_text(&self) -> String;

    /// Parses the value back from text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueConversion`] when `text` does not hold a valid value.
    fn from_text(text: &str) -> Result<Self>;
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }

                fn from_text(text: &str) -> Result<Self> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| Error::value_conversion(text, "integer"))
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar for f64 {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| Error::value_conversion(text, "decimal"))
    }
}

impl Scalar for f32 {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self> {
        text.trim()
            .parse::<f32>()
            .map_err(|_| Error::value_conversion(text, "decimal"))
    }
}

impl Scalar for bool {
    fn to_text(&self) -> String {
        String::from(if *self { "1" } else { "0" })
    }

    fn from_text(text: &str) -> Result<Self> {
        text.trim()
            .parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| Error::value_conversion(text, "boolean"))
    }
}

impl Scalar for String {
    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

/// Value text for the [`datafile!`](crate::datafile) macro: the [`Scalar`]
/// encoding for numbers and booleans, verbatim for strings.
#[doc(hidden)]
pub trait ValueText {
    fn value_text(&self) -> String;
}

macro_rules! impl_value_text {
    ($($ty:ty),*) => {
        $(
            impl ValueText for $ty {
                fn value_text(&self) -> String {
                    Scalar::to_text(self)
                }
            }
        )*
    };
}

impl_value_text!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String);

impl ValueText for str {
    fn value_text(&self) -> String {
        self.to_string()
    }
}

impl<T: ValueText + ?Sized> ValueText for &T {
    fn value_text(&self) -> String {
        (**self).value_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_text() {
        assert_eq!(i64::MIN.to_text(), "-9223372036854775808");
        assert_eq!(i64::from_text("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(u32::from_text("17").unwrap(), 17);
    }

    #[test]
    fn test_integer_rejects_trailing_text() {
        let err = i64::from_text("12abc").unwrap_err();
        assert!(matches!(
            err,
            Error::ValueConversion {
                expected: "integer",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_text_is_not_a_number() {
        assert!(i64::from_text("").is_err());
        assert!(f64::from_text("").is_err());
        assert!(bool::from_text("").is_err());
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(3.5f64.to_text(), "3.5");
        assert_eq!((-0.25f64).to_text(), "-0.25");
        let parsed = f64::from_text("0.1").unwrap();
        assert!((parsed - 0.1).abs() < 1e-12);
        assert_eq!(f64::from_text("12").unwrap(), 12.0);
    }

    #[test]
    fn test_bool_text() {
        assert_eq!(false.to_text(), "0");
        assert!(!bool::from_text("0").unwrap());
        assert!(bool::from_text("1").unwrap());
        assert!(bool::from_text("-3").unwrap());
        assert!(bool::from_text("true").is_err());
    }

    #[test]
    fn test_macro_value_text_uses_codec() {
        assert_eq!(true.value_text(), "1");
        assert_eq!(ValueText::value_text(&"a b"), "a b");
        assert_eq!(String::from("x").value_text(), "x");
        assert_eq!(7u8.value_text(), "7");
        assert_eq!(2.5f64.value_text(), "2.5");
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(String::from_text(" a b ").unwrap(), " a b ");
        assert_eq!("x".to_string().to_text(), "x");
    }
}
