//! # datafile
//!
//! A hierarchical, human-readable data file engine: an ordered tree of
//! named nodes holding positional text values, a writer that renders the
//! tree as text, and a parser that rebuilds it.
//!
//! ## The Format
//!
//! ```text
//! name = Alice;
//! window
//! {
//!     size = 800, 600;
//!     title = "Hello, world";
//! }
//! ```
//!
//! Leaves hold comma-separated values terminated by `;`, blocks nest inside
//! braces. See [`format`] for the full reference.
//!
//! ## Quick Start
//!
//! ```rust
//! use datafile::{from_str, to_string, DataFile};
//!
//! let mut doc = DataFile::new();
//! let size = doc.get_or_create_path(["window", "size"]);
//! doc.node_mut(size).set_int(0, 800);
//! doc.node_mut(size).set_int(1, 600);
//!
//! let text = to_string(&doc);
//! assert_eq!(text, "window\n{\n\tsize = 800, 600;\n}\n");
//!
//! let back = from_str(&text).unwrap();
//! assert_eq!(back, doc);
//! ```
//!
//! ## Files
//!
//! ```rust
//! use datafile::{read, write, DataFile};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("settings.txt");
//!
//! let mut doc = DataFile::new();
//! let volume = doc.get_or_create_child(doc.root(), "volume");
//! doc.node_mut(volume).set_decimal(0, 0.75);
//! write(&doc, &path).unwrap();
//!
//! let mut loaded = DataFile::new();
//! read(&mut loaded, &path).unwrap();
//! let volume = loaded.child(loaded.root(), "volume").unwrap();
//! assert!((loaded.node(volume).decimal_value(0).unwrap() - 0.75).abs() < 1e-9);
//! ```
//!
//! ## Guarantees
//!
//! - Nodes live in an arena owned by the [`DataFile`]; [`NodeId`] handles stay
//!   valid as the tree grows
//! - Malformed input is reported with its line number, never silently skipped
//! - Reading into an existing document is all-or-nothing
//! - No `unsafe` code

pub mod de;
pub mod error;
pub mod format;
mod interop;
pub mod lexer;
pub mod macros;
pub mod node;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use node::{DataFile, Node, NodeId};
pub use options::{Indent, WriteOptions};
pub use ser::Serializer;
pub use value::Scalar;

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

/// Render a document with the default options.
///
/// # Examples
///
/// ```rust
/// use datafile::{to_string, DataFile};
///
/// let mut doc = DataFile::new();
/// let k = doc.get_or_create_child(doc.root(), "k");
/// doc.node_mut(k).set_value(0, "v0");
/// doc.node_mut(k).set_value(1, "v1");
///
/// assert_eq!(to_string(&doc), "k = v0, v1;\n");
/// ```
#[must_use]
pub fn to_string(doc: &DataFile) -> String {
    to_string_with_options(doc, &WriteOptions::default())
}

/// Render a document with custom options.
#[must_use]
pub fn to_string_with_options(doc: &DataFile, options: &WriteOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize(doc);
    serializer.into_inner()
}

/// Write a document to any `io::Write`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, doc: &DataFile) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, &WriteOptions::default())
}

/// Write a document to any `io::Write` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, doc: &DataFile, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(doc, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a document to the file at `path`, replacing its contents.
///
/// The file is written in place; an interrupted write can leave it truncated.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write(doc: &DataFile, path: impl AsRef<Path>) -> Result<()> {
    write_with_options(doc, path, &WriteOptions::default())
}

/// Write a document to the file at `path` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_with_options(
    doc: &DataFile,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot create data file");
        e
    })?;
    to_writer_with_options(BufWriter::new(file), doc, options)?;
    tracing::debug!(path = %path.display(), nodes = doc.node_count(), "wrote data file");
    Ok(())
}

/// Parse a document from text.
///
/// # Examples
///
/// ```rust
/// use datafile::from_str;
///
/// let doc = from_str("k = \"a,b\", 2;").unwrap();
/// let k = doc.child(doc.root(), "k").unwrap();
/// assert_eq!(doc.node(k).values(), ["a,b", "2"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] or [`Error::UnexpectedEof`] for malformed input.
pub fn from_str(s: &str) -> Result<DataFile> {
    let mut doc = DataFile::new();
    from_str_into(&mut doc, s)?;
    Ok(doc)
}

/// Parse text into an existing document, adding to and overwriting its nodes.
///
/// On error `doc` is left unchanged.
///
/// # Errors
///
/// Returns [`Error::Syntax`] or [`Error::UnexpectedEof`] for malformed input.
pub fn from_str_into(doc: &mut DataFile, s: &str) -> Result<()> {
    let mut staged = doc.clone();
    let mut parser = Parser::new(&mut staged);
    parser.parse_str(s)?;
    parser.finish()?;
    *doc = staged;
    Ok(())
}

/// Parse a document from any buffered reader, line by line.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_str`].
pub fn from_reader<R>(reader: R) -> Result<DataFile>
where
    R: BufRead,
{
    let mut doc = DataFile::new();
    from_reader_into(&mut doc, reader)?;
    Ok(doc)
}

/// Parse from a buffered reader into an existing document.
///
/// On error `doc` is left unchanged.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Syntax`] for a line
/// that is not valid UTF-8, otherwise as [`from_str`].
pub fn from_reader_into<R>(doc: &mut DataFile, reader: R) -> Result<()>
where
    R: BufRead,
{
    let mut staged = doc.clone();
    let mut parser = Parser::new(&mut staged);
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => Error::syntax(index + 1, "invalid UTF-8", ""),
            _ => Error::Io(e),
        })?;
        parser.parse_line(&line)?;
    }
    parser.finish()?;
    *doc = staged;
    Ok(())
}

/// Read the file at `path` into `doc`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, and a syntax
/// error for malformed content. On error `doc` is left unchanged.
pub fn read(doc: &mut DataFile, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot open data file");
        e
    })?;

    match from_reader_into(doc, BufReader::new(file)) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), nodes = doc.node_count(), "read data file");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "rejected data file");
            Err(e)
        }
    }
}

/// Read the file at `path` into a new document.
///
/// # Errors
///
/// As [`read`].
pub fn read_file(path: impl AsRef<Path>) -> Result<DataFile> {
    let mut doc = DataFile::new();
    read(&mut doc, path)?;
    Ok(doc)
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl FromStr for DataFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFile {
        let mut doc = DataFile::new();
        let name = doc.get_or_create_child(doc.root(), "name");
        doc.node_mut(name).set_value(0, "Alice");
        let size = doc.get_or_create_path(["window", "size"]);
        doc.node_mut(size).set_int(0, 800);
        doc.node_mut(size).set_int(1, 600);
        let title = doc.get_or_create_path(["window", "title"]);
        doc.node_mut(title).set_value(0, "Main");
        doc
    }

    #[test]
    fn test_round_trip_string() {
        let doc = sample();
        let text = to_string(&doc);
        let back = from_str(&text).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_display_and_from_str() {
        let doc = sample();
        let text = doc.to_string();
        let back: DataFile = text.parse().unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_writer_and_reader() {
        let doc = sample();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        let back = from_reader(io::Cursor::new(buffer)).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_from_str_into_merges() {
        let mut doc = sample();
        from_str_into(&mut doc, "extra = 1;\nname = Bob;").unwrap();

        let name = doc.child(doc.root(), "name").unwrap();
        assert_eq!(doc.node(name).values(), ["Bob"]);
        assert!(doc.has_child(doc.root(), "extra"));
        assert!(doc.has_child(doc.root(), "window"));
    }

    #[test]
    fn test_failed_parse_leaves_document_untouched() {
        let mut doc = sample();
        let before = doc.clone();
        let err = from_str_into(&mut doc, "extra = 1;\n}\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
        assert_eq!(doc, before);
        assert!(!doc.has_child(doc.root(), "extra"));
    }

    #[test]
    fn test_crlf_input() {
        let doc = from_str("a\r\n{\r\n\tb = 1;\r\n}\r\n").unwrap();
        let b = doc.find(["a", "b"]).unwrap();
        assert_eq!(doc.node(b).values(), ["1"]);
    }
}
