//! Basic jsonpack decoding into typed data.
//!
//! Run with: cargo run --example simple

use jsonpack::{from_str, from_value};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: i64,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // ["id","name","Alice","email","alice@example.com"] in the text
    // segment, 42 in the integer segment, then the instruction stream.
    let packed = "id|name|Alice|email|alice@example.com^16^^^$|0|5|1|2|3|4]";

    let value = from_str(packed)?;
    println!("decoded value: {:?}\n", value);

    let user: User = from_value(value)?;
    println!("typed user: {:?}", user);

    assert_eq!(
        user,
        User {
            id: 42,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    );
    println!("✓ Decode successful");

    Ok(())
}
