//! Data file parsing.
//!
//! The [`Parser`] rebuilds a [`DataFile`] tree from text, one line at a time.
//! Each line is classified by the [`lexer`](crate::lexer) and then fed to a
//! small state machine:
//!
//! | State | Token | Action |
//! |-------|-------|--------|
//! | awaiting a field | assignment | set the values of a child of the open block |
//! | awaiting a field | header | remember the name, await `{` |
//! | awaiting a field | `}` | close the open block (error at the root) |
//! | awaiting a field | `{` | error, nothing to open |
//! | awaiting `{` | `{` | open the remembered child as a new block |
//! | awaiting `{` | anything else | error, header without a block |
//!
//! Blank lines are skipped in every state. The open blocks are kept as a
//! stack of [`NodeId`] handles with the root at the bottom.
//!
//! ## Usage
//!
//! ```rust
//! use datafile::from_str;
//!
//! let doc = from_str("outer\n{\n\tinner = 1, 2;\n}\n").unwrap();
//! let inner = doc.find(["outer", "inner"]).unwrap();
//! assert_eq!(doc.node(inner).values(), ["1", "2"]);
//! ```
//!
//! Errors carry the 1-based line number:
//!
//! ```rust
//! use datafile::{from_str, Error};
//!
//! let err = from_str("outer\n{\n\tinner = 1;\n").unwrap_err();
//! assert!(matches!(err, Error::UnexpectedEof { line: 3, .. }));
//! ```

use crate::lexer::{lex_line, Line};
use crate::{DataFile, Error, NodeId, Result};

/// What the parser accepts next.
#[derive(Debug)]
enum State {
    AwaitField,
    /// A header was read; the next non-blank line must be `{`.
    AwaitOpen { name: String, line: usize },
}

/// An open block on the parser stack.
#[derive(Debug)]
struct Frame {
    id: NodeId,
    name: String,
    line: usize,
}

/// Line-driven parser writing into a borrowed [`DataFile`].
///
/// Feed lines with [`Parser::parse_line`] and call [`Parser::finish`] once
/// the input is exhausted.
pub struct Parser<'a> {
    doc: &'a mut DataFile,
    stack: Vec<Frame>,
    state: State,
    line: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser that adds to the tree below `doc`'s root.
    pub fn new(doc: &'a mut DataFile) -> Self {
        let root = doc.root();
        Parser {
            doc,
            stack: vec![Frame {
                id: root,
                name: String::new(),
                line: 0,
            }],
            state: State::AwaitField,
            line: 0,
        }
    }

    /// Parses a complete text.
    pub fn parse_str(&mut self, input: &str) -> Result<()> {
        for raw in input.lines() {
            self.parse_line(raw)?;
        }
        Ok(())
    }

    /// Consumes the next input line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the line does not fit the current state.
    pub fn parse_line(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let line_no = self.line;
        let token = lex_line(line_no, raw)?;

        match std::mem::replace(&mut self.state, State::AwaitField) {
            State::AwaitField => match token {
                Line::Blank => {}
                Line::Assignment { name, groups } => {
                    let parent = self.top();
                    let id = self.doc.get_or_create_child(parent, name);
                    let node = self.doc.node_mut(id);
                    for group in groups {
                        for (index, value) in group.into_iter().enumerate() {
                            node.set_value(index, value);
                        }
                    }
                }
                Line::Header(name) => {
                    self.state = State::AwaitOpen {
                        name: name.to_string(),
                        line: line_no,
                    };
                }
                Line::OpenBrace => {
                    return Err(Error::syntax(
                        line_no,
                        "'{' without a preceding block header",
                        raw.trim(),
                    ));
                }
                Line::CloseBrace => {
                    if self.stack.len() == 1 {
                        return Err(Error::syntax(
                            line_no,
                            "unbalanced '}' with no open block",
                            raw.trim(),
                        ));
                    }
                    if let Some(frame) = self.stack.pop() {
                        tracing::trace!(block = %frame.name, line = line_no, "closed block");
                    }
                }
            },
            State::AwaitOpen { name, line } => match token {
                Line::Blank => {
                    self.state = State::AwaitOpen { name, line };
                }
                Line::OpenBrace => {
                    let parent = self.top();
                    let id = self.doc.get_or_create_child(parent, &name);
                    tracing::trace!(block = %name, line = line_no, "opened block");
                    self.stack.push(Frame {
                        id,
                        name,
                        line: line_no,
                    });
                }
                _ => {
                    return Err(Error::syntax(
                        line_no,
                        &format!("expected '{{' after block header {:?} on line {}", name, line),
                        raw.trim(),
                    ));
                }
            },
        }

        Ok(())
    }

    /// Checks that the input ended outside any header or block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] for a dangling header or an unclosed block.
    pub fn finish(self) -> Result<()> {
        if let State::AwaitOpen { name, line } = &self.state {
            return Err(Error::unexpected_eof(
                self.line,
                &format!("'{{' opening block {:?} from line {}", name, line),
            ));
        }

        if let Some(frame) = self.stack.last().filter(|_| self.stack.len() > 1) {
            return Err(Error::unexpected_eof(
                self.line,
                &format!("'}}' closing block {:?} from line {}", frame.name, frame.line),
            ));
        }

        Ok(())
    }

    fn top(&self) -> NodeId {
        self.stack.last().map_or(self.doc.root(), |frame| frame.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<DataFile> {
        let mut doc = DataFile::new();
        let mut parser = Parser::new(&mut doc);
        parser.parse_str(input)?;
        parser.finish()?;
        Ok(doc)
    }

    #[test]
    fn test_flat_assignments() {
        let doc = parse("a = 1;\nb = x, y;\n").unwrap();
        let a = doc.child(doc.root(), "a").unwrap();
        let b = doc.child(doc.root(), "b").unwrap();
        assert_eq!(doc.node(a).values(), ["1"]);
        assert_eq!(doc.node(b).values(), ["x", "y"]);
    }

    #[test]
    fn test_nested_blocks() {
        let doc = parse("outer\n{\n    inner = 1, 2;\n}\n").unwrap();
        let root = doc.node(doc.root());
        assert_eq!(root.child_count(), 1);

        let outer = doc.child(doc.root(), "outer").unwrap();
        assert_eq!(doc.node(outer).value_count(), 0);
        assert_eq!(doc.node(outer).child_count(), 1);

        let inner = doc.child(outer, "inner").unwrap();
        assert_eq!(doc.node(inner).values(), ["1", "2"]);
    }

    #[test]
    fn test_blank_lines_between_header_and_brace() {
        let doc = parse("outer\n\n{\n}\n").unwrap();
        assert!(doc.has_child(doc.root(), "outer"));
    }

    #[test]
    fn test_reopened_block_merges() {
        let doc = parse("b\n{\nx = 1;\n}\nb\n{\ny = 2;\n}\n").unwrap();
        let b = doc.child(doc.root(), "b").unwrap();
        assert_eq!(doc.node(doc.root()).child_count(), 1);
        assert_eq!(doc.node(b).child_count(), 2);
    }

    #[test]
    fn test_later_group_overwrites_from_start() {
        let doc = parse("k = a, b; c;").unwrap();
        let k = doc.child(doc.root(), "k").unwrap();
        assert_eq!(doc.node(k).values(), ["c", "b"]);
    }

    #[test]
    fn test_unbalanced_close_brace() {
        let err = parse("}\n").unwrap_err();
        match err {
            Error::Syntax { line, context, .. } => {
                assert_eq!(line, 1);
                assert_eq!(context, "}");
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_close_brace_after_block() {
        let err = parse("a\n{\n}\n}\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 4, .. }));
    }

    #[test]
    fn test_open_brace_without_header() {
        let err = parse("x = 1;\n{\n}\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_header_without_brace() {
        let err = parse("orphan\nx = 1;\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
        assert!(err.to_string().contains("orphan"));
    }

    #[test]
    fn test_dangling_header_at_end() {
        let err = parse("a = 1;\norphan\n").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { line: 2, .. }));
    }

    #[test]
    fn test_unclosed_block_at_end() {
        let err = parse("outer\n{\n\tinner\n\t{\n\t\tx = 1;\n\t}\n").unwrap_err();
        match err {
            Error::UnexpectedEof { line, expected } => {
                assert_eq!(line, 6);
                assert!(expected.contains("outer"));
            }
            other => panic!("Expected unexpected EOF, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("").unwrap();
        assert_eq!(doc.node_count(), 1);
    }
}
