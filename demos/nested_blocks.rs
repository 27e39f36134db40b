//! Nested blocks, stable node handles and files on disk.
//!
//! Run with: cargo run --example nested_blocks

use datafile::{read_file, write, DataFile};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = DataFile::new();

    // Handles stay valid while siblings are added.
    let window = doc.get_or_create_path(["graphics", "window"]);
    for (i, monitor) in ["left", "right", "center"].into_iter().enumerate() {
        let id = doc.get_or_create_path(["graphics", "monitors", monitor]);
        doc.node_mut(id).set_int(0, i as i64);
    }
    doc.node_mut(window).set_int(0, 1920);
    doc.node_mut(window).set_int(1, 1080);

    let path = std::env::temp_dir().join("datafile_nested_blocks.txt");
    write(&doc, &path)?;
    println!("Wrote {}:\n{}", path.display(), std::fs::read_to_string(&path)?);

    let loaded = read_file(&path)?;
    let window = loaded
        .find(["graphics", "window"])
        .ok_or("missing window")?;
    let node = loaded.node(window);
    println!(
        "window = {} x {}",
        node.int_value(0)?,
        node.int_value(1)?
    );

    std::fs::remove_file(&path)?;
    Ok(())
}
