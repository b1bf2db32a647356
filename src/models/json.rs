//! Helpers for assembling JSON objects out of optional node settings

use serde_json::{Map, Value};

/// JSON object under construction
pub(crate) type Object = Map<String, Value>;

/// Largest float that still converts losslessly into an `i64`
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Converts a float into a JSON number
///
/// Integral values are emitted as integers so that `3.0` serializes as `3`,
/// which is how the engine documents every numeric option.
pub(crate) fn float(v: f64) -> Value {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_FLOAT {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Inserts `value` under `key` when it is set
pub(crate) fn put<T>(map: &mut Object, key: &str, value: &Option<T>)
where
    T: Clone + Into<Value>,
{
    if let Some(v) = value {
        map.insert(key.to_string(), v.clone().into());
    }
}

/// Inserts a float under `key` when it is set
pub(crate) fn put_float(map: &mut Object, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        map.insert(key.to_string(), float(v));
    }
}

/// Inserts a string list under `key` unless it is empty
pub(crate) fn put_strings(map: &mut Object, key: &str, values: &[String]) {
    if !values.is_empty() {
        map.insert(key.to_string(), Value::from(values.to_vec()));
    }
}

/// Inserts an object under `key` unless it is empty
pub(crate) fn put_object(map: &mut Object, key: &str, value: &Object) {
    if !value.is_empty() {
        map.insert(key.to_string(), Value::Object(value.clone()));
    }
}

/// Builds `{key: value}`
pub(crate) fn single(key: impl Into<String>, value: Value) -> Value {
    let mut map = Object::new();
    map.insert(key.into(), value);
    Value::Object(map)
}

/// Collapses rendered clauses: none is absent, one is the bare clause,
/// several become an array
pub(crate) fn one_or_many(mut values: Vec<Value>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(Value::Array(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_drops_zero_fraction() {
        assert_eq!(serde_json::to_string(&float(3.0)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&float(-10.0)).unwrap(), "-10");
        assert_eq!(serde_json::to_string(&float(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&float(0.371235374214817)).unwrap(), "0.371235374214817");
    }

    #[test]
    fn test_put_skips_unset() {
        let mut map = Object::new();
        put::<String>(&mut map, "analyzer", &None);
        put(&mut map, "operator", &Some("and".to_string()));
        put_float(&mut map, "boost", None);
        put_strings(&mut map, "fields", &[]);
        assert_eq!(Value::Object(map), json!({"operator": "and"}));
    }

    #[test]
    fn test_one_or_many() {
        assert_eq!(one_or_many(vec![]), None);
        assert_eq!(one_or_many(vec![json!({"a": 1})]), Some(json!({"a": 1})));
        assert_eq!(
            one_or_many(vec![json!(1), json!(2)]),
            Some(json!([1, 2]))
        );
    }
}
