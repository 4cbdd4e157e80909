//! Working with decoded values dynamically.
//!
//! Run with: cargo run --example dynamic_values

use jsonpack::{from_str, pack, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // {"name":"a b","ids":[1,1,2],"meta":null} with the shared integer 1
    // stored once and referenced twice
    let packed = "name|a+b|ids|meta^1|2^^^$|0|1|2|@|4|4|5]|3|-3]";
    let value = from_str(packed)?;

    // Walk the structure without knowing its shape up front
    describe(&value, 0);

    // Targeted access through the typed accessors
    let obj = value.as_object().expect("top level is an object");
    println!("\nname = {:?}", obj.get("name").and_then(|v| v.as_str()));

    // Or build the expected shape with the pack! macro and compare
    let expected = pack!({
        "name": "a b",
        "ids": [1, 1, 2],
        "meta": null
    });
    assert_eq!(value, expected);
    println!("✓ Matches the pack! literal");

    Ok(())
}

fn describe(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            println!("{}object ({} entries)", pad, map.len());
            for (key, item) in map.iter() {
                println!("{}  {}:", pad, key);
                describe(item, indent + 2);
            }
        }
        Value::Array(items) => {
            println!("{}array ({} items)", pad, items.len());
            for item in items {
                describe(item, indent + 1);
            }
        }
        other => println!("{}{:?}", pad, other),
    }
}
