use jsonpack::{pack, Number, PackMap, Value};

#[test]
fn test_pack_macro_null() {
    let value = pack!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_pack_macro_absent() {
    let value = pack!(absent);
    assert_eq!(value, Value::Absent);
}

#[test]
fn test_pack_macro_booleans() {
    let true_val = pack!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = pack!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_pack_macro_numbers() {
    let int_val = pack!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = pack!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = pack!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_pack_macro_strings() {
    let string_val = pack!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = pack!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_pack_macro_arrays() {
    let empty_array = pack!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let number_array = pack!([1, 2, 3]);
    assert_eq!(
        number_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::Number(Number::Integer(2)),
            Value::Number(Number::Integer(3)),
        ])
    );

    let mixed = pack!([true, null, absent, "x"]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Bool(true),
            Value::Null,
            Value::Absent,
            Value::String("x".to_string()),
        ])
    );
}

#[test]
fn test_pack_macro_objects() {
    let empty_object = pack!({});
    assert_eq!(empty_object, Value::Object(PackMap::new()));

    let object = pack!({
        "name": "Alice",
        "age": 30,
        "active": true
    });
    let obj = object.as_object().unwrap();
    assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
    assert_eq!(obj.get("age").and_then(|v| v.as_i64()), Some(30));
    assert_eq!(obj.get("active").and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn test_pack_macro_preserves_insertion_order() {
    let object = pack!({
        "z": 1,
        "a": 2,
        "m": 3
    });
    let keys: Vec<_> = object.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_pack_macro_nested_structures() {
    let value = pack!({
        "users": [
            {"name": "Alice", "admin": true},
            {"name": "Bob", "admin": false}
        ],
        "meta": {"total": 2}
    });

    let users = value.as_object().unwrap().get("users").unwrap();
    assert_eq!(users.as_array().unwrap().len(), 2);

    let meta = value.as_object().unwrap().get("meta").unwrap();
    assert_eq!(
        meta.as_object().unwrap().get("total").and_then(|v| v.as_i64()),
        Some(2)
    );
}

#[test]
fn test_pack_macro_matches_decoded_payloads() {
    let decoded = jsonpack::from_str("a|b^1^^^$|0|2|1|@|-1|-3]]").unwrap();
    let built = pack!({
        "a": 1,
        "b": [true, null]
    });
    assert_eq!(decoded, built);
}
