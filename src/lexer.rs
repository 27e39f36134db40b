//! Line classification.
//!
//! The lexer turns one raw input line into a [`Line`] token. The parser only
//! ever sees these tokens, never raw text.
//!
//! Lines are trimmed and then classified in this order:
//!
//! 1. [`Line::Blank`]: nothing left after trimming
//! 2. [`Line::Assignment`]: contains an `=` outside double quotes
//! 3. [`Line::OpenBrace`]: starts with `{`
//! 4. [`Line::CloseBrace`]: ends with `}`
//! 5. [`Line::Header`]: anything else, the name of a block to be opened
//!
//! ```rust
//! use datafile::lexer::{lex_line, Line};
//!
//! assert_eq!(lex_line(1, "  {  ").unwrap(), Line::OpenBrace);
//! assert_eq!(lex_line(2, "window").unwrap(), Line::Header("window"));
//! assert_eq!(
//!     lex_line(3, r#"k = "a,b", 2;"#).unwrap(),
//!     Line::Assignment {
//!         name: "k",
//!         groups: vec![vec!["a,b".to_string(), "2".to_string()]],
//!     }
//! );
//! ```

use crate::{Error, Result};

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// `name = tokens`. Each `;` closes a group of positional values.
    Assignment {
        name: &'a str,
        groups: Vec<Vec<String>>,
    },
    OpenBrace,
    CloseBrace,
    Header(&'a str),
}

/// Classifies `raw`, the content of the 1-based input line `line_no`.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for an unterminated quote or for text sharing a
/// line with a brace.
pub fn lex_line(line_no: usize, raw: &str) -> Result<Line<'_>> {
    let line = raw.trim();

    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(eq) = find_unquoted(line, '=') {
        let name = line[..eq].trim();
        let groups = split_values(line[eq + 1..].trim())
            .ok_or_else(|| Error::syntax(line_no, "unterminated quote", line))?;
        return Ok(Line::Assignment { name, groups });
    }

    if let Some(rest) = line.strip_prefix('{') {
        if !rest.trim().is_empty() {
            return Err(Error::syntax(
                line_no,
                "'{' must stand on its own line",
                line,
            ));
        }
        return Ok(Line::OpenBrace);
    }

    if let Some(rest) = line.strip_suffix('}') {
        if !rest.trim().is_empty() {
            return Err(Error::syntax(
                line_no,
                "'}' must stand on its own line",
                line,
            ));
        }
        return Ok(Line::CloseBrace);
    }

    Ok(Line::Header(line))
}

fn find_unquoted(text: &str, target: char) -> Option<usize> {
    let mut quoted = false;
    for (i, ch) in text.char_indices() {
        if ch == '"' {
            quoted = !quoted;
        } else if ch == target && !quoted {
            return Some(i);
        }
    }
    None
}

/// Splits assignment value text into groups of trimmed tokens.
///
/// Returns `None` if a quote is left open.
fn split_values(text: &str) -> Option<Vec<Vec<String>>> {
    let mut groups = Vec::new();
    let mut tokens = Vec::new();
    let mut token = String::new();
    // Anything written into the current group, so `= ;` stays valueless
    // while `= "";` holds one empty value.
    let mut touched = false;
    let mut quoted = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                touched = true;
            }
            _ if quoted => token.push(ch),
            ',' => {
                tokens.push(std::mem::take(&mut token));
                touched = true;
            }
            ';' => {
                tokens.push(std::mem::take(&mut token));
                groups.push(finish_group(std::mem::take(&mut tokens), touched));
                touched = false;
            }
            _ => {
                if !ch.is_whitespace() {
                    touched = true;
                }
                token.push(ch);
            }
        }
    }

    if quoted {
        return None;
    }

    if touched {
        tokens.push(token);
        groups.push(finish_group(tokens, true));
    }

    Some(groups)
}

fn finish_group(tokens: Vec<String>, touched: bool) -> Vec<String> {
    if !touched {
        return Vec::new();
    }
    tokens.into_iter().map(|t| t.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &str) -> Vec<Vec<String>> {
        match lex_line(1, raw).unwrap() {
            Line::Assignment { groups, .. } => groups,
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(lex_line(1, "").unwrap(), Line::Blank);
        assert_eq!(lex_line(1, " \t \r").unwrap(), Line::Blank);
    }

    #[test]
    fn test_assignment_name_is_trimmed() {
        match lex_line(1, "\t  key   =  1 ;").unwrap() {
            Line::Assignment { name, groups } => {
                assert_eq!(name, "key");
                assert_eq!(groups, vec![vec!["1".to_string()]]);
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_split_on_first_equals() {
        match lex_line(1, "a = b = c;").unwrap() {
            Line::Assignment { name, groups } => {
                assert_eq!(name, "a");
                assert_eq!(groups, vec![vec!["b = c".to_string()]]);
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_quoted_delimiters_are_literal() {
        assert_eq!(
            values(r#"k = "a,b", 2;"#),
            vec![vec!["a,b".to_string(), "2".to_string()]]
        );
        assert_eq!(values(r#"k = "x;y";"#), vec![vec!["x;y".to_string()]]);
    }

    #[test]
    fn test_missing_semicolon_still_commits() {
        assert_eq!(
            values("k = 1, 2"),
            vec![vec!["1".to_string(), "2".to_string()]]
        );
    }

    #[test]
    fn test_empty_assignment_has_no_values() {
        assert_eq!(values("k = ;"), vec![Vec::<String>::new()]);
        assert!(values("k =").is_empty());
    }

    #[test]
    fn test_quoted_empty_value() {
        assert_eq!(values(r#"k = "";"#), vec![vec![String::new()]]);
    }

    #[test]
    fn test_empty_tokens_between_commas() {
        assert_eq!(
            values("k = , , z;"),
            vec![vec![String::new(), String::new(), "z".to_string()]]
        );
    }

    #[test]
    fn test_multiple_groups() {
        assert_eq!(
            values("k = a, b; c;"),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()]
            ]
        );
    }

    #[test]
    fn test_unterminated_quote() {
        let err = lex_line(7, r#"k = "open, 1;"#).unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 7, .. }));
    }

    #[test]
    fn test_braces() {
        assert_eq!(lex_line(1, "{").unwrap(), Line::OpenBrace);
        assert_eq!(lex_line(1, "\t\t}").unwrap(), Line::CloseBrace);
        assert!(lex_line(1, "{ inner").is_err());
        assert!(lex_line(1, "x }").is_err());
    }

    #[test]
    fn test_header() {
        assert_eq!(lex_line(1, "  my block ").unwrap(), Line::Header("my block"));
    }
}
