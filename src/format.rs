//! Data file format reference.
//!
//! This module documents the text format read and written by this crate.
//! It contains no code.
//!
//! # Overview
//!
//! A data file is UTF-8 text, read line by line. Every line is trimmed
//! before it is interpreted, so indentation only matters to human readers.
//! The writer indents nested blocks with one tab per level.
//!
//! ```text
//! name = v0, v1;
//! block_name
//! {
//!     nested = "a, b", 2;
//! }
//! ```
//!
//! # Grammar
//!
//! ```text
//! document    := line*
//! line        := blank | assignment | header | open_brace | close_brace
//! assignment  := NAME '=' token (',' token)* ';'?
//! token       := quoted | bare
//! quoted      := '"' any_char_except_quote* '"'
//! header      := NAME                ; no '=', no leading '{', no trailing '}'
//! open_brace  := '{'
//! close_brace := '}'
//! ```
//!
//! # Assignments
//!
//! A line containing `=` outside quotes assigns positional values to the
//! field named before the first such `=`. The field is created if missing.
//!
//! - `,` separates values and surrounding whitespace is trimmed
//! - `;` ends the value list; a missing final `;` is tolerated
//! - `name = ;` declares the field with no values
//! - empty positions are allowed: `k = , , z;` holds `""`, `""`, `"z"`
//!
//! ```rust
//! use datafile::from_str;
//!
//! let doc = from_str("k = , , z").unwrap();
//! let k = doc.child(doc.root(), "k").unwrap();
//! assert_eq!(doc.node(k).values(), ["", "", "z"]);
//! ```
//!
//! # Quoting
//!
//! Double quotes make `,` and `;` literal. The quotes themselves are not part
//! of the value.
//!
//! ```rust
//! use datafile::from_str;
//!
//! let doc = from_str(r#"k = "a,b", 2;"#).unwrap();
//! let k = doc.child(doc.root(), "k").unwrap();
//! assert_eq!(doc.node(k).values(), ["a,b", "2"]);
//! ```
//!
//! There is no escape for a literal `"` inside a value, and quoted values
//! are trimmed like bare ones, so leading and trailing whitespace cannot be
//! stored. An unterminated quote is a syntax error.
//!
//! # Blocks
//!
//! A line that is neither an assignment nor a brace names a block. The next
//! non-blank line must be `{`; the block then extends to the matching `}`.
//! Each brace stands on its own line.
//!
//! ```rust
//! use datafile::from_str;
//!
//! let doc = from_str("outer\n{\n\tinner = 1, 2;\n}").unwrap();
//! let outer = doc.child(doc.root(), "outer").unwrap();
//! assert_eq!(doc.node(outer).value_count(), 0);
//! assert_eq!(doc.node(outer).child_count(), 1);
//! ```
//!
//! Opening a block or assigning a field that already exists adds to it
//! rather than creating a duplicate.
//!
//! # Writing
//!
//! - a node without children is written as `name = v0, v1;`
//! - a node with children is written as a block and its own values are
//!   dropped
//! - a node holding exactly one empty value is written as `name = "";`
//!
//! Names are written as stored. A name containing `=`, `,`, `;`, `{`, `}`,
//! `"` or a line break produces text that does not read back the same. The
//! empty name is illegal too: as a block header it is written as a blank
//! line, which the reader skips.
//!
//! ```rust
//! use datafile::{from_str, to_string, DataFile};
//!
//! let mut doc = DataFile::new();
//! let inner = doc.get_or_create_path(["", "x"]);
//! doc.node_mut(inner).set_int(0, 1);
//!
//! let text = to_string(&doc);
//! assert_eq!(text, "\n{\n\tx = 1;\n}\n");
//! assert!(from_str(&text).is_err());
//! ```
//!
//! # Errors
//!
//! | Input | Error |
//! |-------|-------|
//! | `}` with no open block | [`Error::Syntax`](crate::Error::Syntax) |
//! | `{` with no header before it | [`Error::Syntax`](crate::Error::Syntax) |
//! | header followed by anything but `{` | [`Error::Syntax`](crate::Error::Syntax) |
//! | text after `{` or before `}` | [`Error::Syntax`](crate::Error::Syntax) |
//! | unterminated quote | [`Error::Syntax`](crate::Error::Syntax) |
//! | end of input inside a block or after a header | [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) |
