//! Configuration options for writing data files.
//!
//! - [`WriteOptions`]: main configuration struct
//! - [`Indent`]: the unit written once per nesting depth
//!
//! Indentation is only cosmetic when reading, so every option here produces
//! text the parser reads back the same way.
//!
//! ## Examples
//!
//! ```rust
//! use datafile::{to_string_with_options, DataFile, Indent, WriteOptions};
//!
//! let mut doc = DataFile::new();
//! let leaf = doc.get_or_create_path(["block", "leaf"]);
//! doc.node_mut(leaf).set_value(0, "x");
//!
//! let options = WriteOptions::new().with_indent(Indent::Spaces(2));
//! let text = to_string_with_options(&doc, &options);
//! assert_eq!(text, "block\n{\n  leaf = x;\n}\n");
//! ```

use serde::{Deserialize, Serialize};

/// Indentation unit for nested blocks.
///
/// ```rust
/// use datafile::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text written once per depth level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration options for the writer.
///
/// The defaults produce the canonical format: one tab per depth, values
/// written verbatim.
///
/// Options derive serde traits so a host can keep them in its own config:
///
/// ```rust
/// use datafile::{Indent, WriteOptions};
///
/// let options: WriteOptions = serde_json::from_str(r#"{"indent":{"spaces":4}}"#).unwrap();
/// assert_eq!(options.indent, Indent::Spaces(4));
/// assert!(!options.quote_delimiters);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    pub indent: Indent,
    /// Wrap values containing `,` or `;` in double quotes so they survive a
    /// round trip. Off by default, which writes values exactly as stored.
    pub quote_delimiters: bool,
}

impl WriteOptions {
    /// Creates default options (tab indentation, verbatim values).
    ///
    /// ```rust
    /// use datafile::{Indent, WriteOptions};
    ///
    /// let options = WriteOptions::new();
    /// assert_eq!(options.indent, Indent::Tab);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables quoting of values that contain `,` or `;`.
    #[must_use]
    pub fn with_quote_delimiters(mut self, quote: bool) -> Self {
        self.quote_delimiters = quote;
        self
    }
}
