//! The [`pack!`](crate::pack) macro for building [`crate::Value`] literals.

#[macro_export]
macro_rules! pack {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle the absence marker
    (absent) => {
        $crate::Value::Absent
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::pack!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::PackMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::PackMap::new();
        $(
            object.insert($key.to_string(), $crate::pack!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: anything convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, PackMap, Value};

    #[test]
    fn test_pack_macro_primitives() {
        assert_eq!(pack!(null), Value::Null);
        assert_eq!(pack!(absent), Value::Absent);
        assert_eq!(pack!(true), Value::Bool(true));
        assert_eq!(pack!(false), Value::Bool(false));
        assert_eq!(pack!(42), Value::Number(Number::Integer(42)));
        assert_eq!(pack!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(pack!("hi"), Value::String("hi".to_string()));
    }

    #[test]
    fn test_pack_macro_arrays() {
        assert_eq!(pack!([]), Value::Array(vec![]));
        assert_eq!(
            pack!([1, 2, 3]),
            Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
        assert_eq!(
            pack!([true, null, "x"]),
            Value::Array(vec![Value::Bool(true), Value::Null, Value::from("x")])
        );
    }

    #[test]
    fn test_pack_macro_objects() {
        assert_eq!(pack!({}), Value::Object(PackMap::new()));

        let value = pack!({
            "name": "Alice",
            "age": 30,
            "tags": ["a", "b"]
        });
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
        assert_eq!(obj.get("age").and_then(|v| v.as_i64()), Some(30));
        assert_eq!(
            obj.get("tags"),
            Some(&Value::Array(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn test_pack_macro_nested() {
        let value = pack!({
            "outer": {
                "inner": [1, [2, {"deep": true}]]
            }
        });
        let outer = value.as_object().unwrap().get("outer").unwrap();
        let inner = outer.as_object().unwrap().get("inner").unwrap();
        assert_eq!(inner.as_array().unwrap().len(), 2);
    }
}
