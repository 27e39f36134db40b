//! Error types for reading, writing and querying data files.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the source or destination could not be opened, read or written
//! - **Syntax Errors**: a malformed line, with its line number and content
//! - **Unexpected End of Input**: a block or header left open when the text ends
//! - **Value Conversion Errors**: a typed accessor found text that is not a number
//! - **Index Errors**: a positional value access past the stored values
//!
//! ## Examples
//!
//! ```rust
//! use datafile::{from_str, Error};
//!
//! let result = from_str("}");
//! assert!(matches!(result, Err(Error::Syntax { line: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every error the data file engine can report.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line structure
    #[error("Syntax error at line {line}: {msg}\n{context}")]
    Syntax {
        line: usize,
        msg: String,
        context: String,
    },

    /// Input ended while a block or header was still open
    #[error("Unexpected end of input at line {line}\nExpected: {expected}")]
    UnexpectedEof { line: usize, expected: String },

    /// Typed accessor on text that does not hold the requested type
    #[error("Cannot convert {value:?} to {expected}")]
    ValueConversion {
        value: String,
        expected: &'static str,
    },

    /// Positional value access beyond the stored values
    #[error("Value index {index} out of range for a node holding {len} values")]
    IndexOutOfRange { index: usize, len: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error for the given 1-based line and its content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datafile::Error;
    ///
    /// let err = Error::syntax(10, "unbalanced '}'", "}");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            expected: expected.to_string(),
        }
    }

    /// Creates a conversion error for a scalar that is not a valid `expected`.
    ///
    /// ```rust
    /// use datafile::Error;
    ///
    /// let err = Error::value_conversion("abc", "integer");
    /// assert_eq!(err.to_string(), "Cannot convert \"abc\" to integer");
    /// ```
    pub fn value_conversion(value: &str, expected: &'static str) -> Self {
        Error::ValueConversion {
            value: value.to_string(),
            expected,
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the input line an error refers to, when it has one.
    ///
    /// ```rust
    /// use datafile::from_str;
    ///
    /// let err = from_str("a = 1;\n}").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } | Error::UnexpectedEof { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_syntax_error_display() {
        let err = Error::syntax(3, "expected '{' after block header \"outer\"", "x = 1;");
        let text = err.to_string();
        assert!(text.contains("line 3"));
        assert!(text.contains("x = 1;"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_index_error_display() {
        let err = Error::index_out_of_range(4, 2);
        assert_eq!(
            err.to_string(),
            "Value index 4 out of range for a node holding 2 values"
        );
    }
}
