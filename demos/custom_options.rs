//! Writer options: indentation and quoting of delimiter characters.
//!
//! Run with: cargo run --example custom_options

use datafile::{datafile, from_str, to_string_with_options, Indent, WriteOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = datafile! {
        "title" => ["Hello, world"],
        "layout" => {
            "columns" => [3],
            "gap" => [0.5],
        },
    };

    // Default: tabs, values written verbatim
    let default = to_string_with_options(&doc, &WriteOptions::new());
    println!("Default:\n{}", default);

    // Two-space indentation with quoted delimiters
    let options = WriteOptions::new()
        .with_indent(Indent::Spaces(2))
        .with_quote_delimiters(true);
    let quoted = to_string_with_options(&doc, &options);
    println!("Spaces + quoting:\n{}", quoted);

    assert_eq!(from_str(&quoted)?, doc);
    assert_ne!(from_str(&default)?, doc);
    println!("✓ Only the quoted output round-trips the comma");

    Ok(())
}
