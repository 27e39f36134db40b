//! Converting a document to and from JSON through serde.
//!
//! Run with: cargo run --example json_interop

use datafile::{from_str, to_string, DataFile};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str("server\n{\n\thost = localhost;\n\tports = 80, 443;\n}\n")?;

    let json = serde_json::to_string_pretty(&doc)?;
    println!("As JSON:\n{}\n", json);

    let from_json: DataFile =
        serde_json::from_str(r#"{ "cache": { "size": 256, "enabled": true } }"#)?;
    println!("From JSON:\n{}", to_string(&from_json));

    Ok(())
}
