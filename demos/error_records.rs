//! Consuming decoded error records.
//!
//! Run with: cargo run --example error_records

use jsonpack::{from_str, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // An error record with a message and two captured fields
    let packed = "message|connection+refused|code|host|db.internal^1f5^^^#|0|1|2|5|3|4]";
    let value = from_str(packed)?;

    let record = match &value {
        Value::Error(record) => record,
        other => panic!("expected an error record, got {:?}", other),
    };

    println!("message: {}", record.message());
    println!("fields:");
    for (key, field) in record.fields().iter() {
        println!("  {} = {}", key, field);
    }

    assert_eq!(record.message(), "connection refused");
    assert_eq!(record.get("code").and_then(|v| v.as_i64()), Some(1841));
    assert_eq!(
        record.get("host").and_then(|v| v.as_str()),
        Some("db.internal")
    );
    println!("✓ Error record decoded");

    Ok(())
}
