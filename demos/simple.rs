//! Build a document, write it to text and read it back.
//!
//! Run with: cargo run --example simple

use datafile::{from_str, to_string, DataFile};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = DataFile::new();
    let root = doc.root();

    let name = doc.get_or_create_child(root, "name");
    doc.node_mut(name).set_value(0, "Alice Johnson");

    let age = doc.get_or_create_child(root, "age");
    doc.node_mut(age).set_int(0, 42);

    let admin = doc.get_or_create_child(root, "admin");
    doc.node_mut(admin).set_bool(0, true);

    // Write to the data file format
    let text = to_string(&doc);
    println!("Data file:\n{}", text);

    // Read it back
    let back = from_str(&text)?;
    assert_eq!(doc, back);

    let age = back.child(back.root(), "age").ok_or("missing age")?;
    println!("age = {}", back.node(age).int_value(0)?);
    println!("✓ Round-trip successful");

    Ok(())
}
