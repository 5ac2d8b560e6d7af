//! Read a JSON record list (the format the upstream template tooling
//! writes) and encode every entry.
//!
//! Run with: cargo run --example json_batch [file.json]

use std::{env, fs};

use objtoken::{encode, ObjectRecord};

const SAMPLE: &str = r#"[
    {"id": 1, "x": 5205.0, "y": 1245.0, "y_angle": 18, "z_layer": 3},
    {"id": 8, "x": 15.0, "y": -45.5, "z_layer": 4, "z_order": 2}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let records: Vec<ObjectRecord> = serde_json::from_str(&data)?;
    for record in &records {
        let token = encode(record)?;
        println!("object {} -> {} digits: {:?}", record.id, token.len(), token);
    }

    Ok(())
}
