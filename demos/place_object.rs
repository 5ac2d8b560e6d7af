//! Encode one placeable object and print the token a transport layer
//! would deliver to the remote service.
//!
//! Run with: cargo run --example place_object

use objtoken::{decode, encode, ObjectRecord};

fn main() -> Result<(), objtoken::Error> {
    let record = ObjectRecord::new(1, 5205.0, 1245.0)
        .with_y_angle(18)
        .with_z_layer(3);

    let token = encode(&record)?;
    println!("record: {:?}", record);
    println!("token ({} base-126 digits): {:?}", token.len(), token);

    // Reading the token back reproduces the record exactly.
    let back = decode(&token)?;
    assert_eq!(back, record);
    println!("decoded record matches the original");

    Ok(())
}
