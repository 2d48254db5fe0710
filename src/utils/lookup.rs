use serde_json::Value;

/// Safe nested lookup over externally-sourced JSON.
///
/// Walks a JSON pointer ("/a/b/0/c") and returns `None` the moment any
/// intermediate object or array element is missing, or the final value is
/// null. Never panics; the caller supplies the default.
pub fn lookup<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    value.pointer(pointer).filter(|v| !v.is_null())
}

pub fn lookup_f64(value: &Value, pointer: &str) -> Option<f64> {
    lookup(value, pointer).and_then(Value::as_f64)
}

pub fn lookup_i64(value: &Value, pointer: &str) -> Option<i64> {
    lookup(value, pointer).and_then(Value::as_i64)
}

pub fn lookup_str<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    lookup(value, pointer).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_path() {
        let v = json!({"a": {"b": {"c": 42}}});
        assert_eq!(lookup_i64(&v, "/a/b/c"), Some(42));
        assert_eq!(lookup_f64(&v, "/a/b/c"), Some(42.0));
    }

    #[test]
    fn test_lookup_missing_at_any_depth_returns_none() {
        let v = json!({"a": {"b": {"c": 42}}});
        assert_eq!(lookup(&v, "/x"), None);
        assert_eq!(lookup(&v, "/a/x"), None);
        assert_eq!(lookup(&v, "/a/b/x"), None);
        assert_eq!(lookup(&v, "/a/b/c/d"), None);
    }

    #[test]
    fn test_lookup_null_is_absent() {
        let v = json!({"a": {"b": null}});
        assert_eq!(lookup(&v, "/a/b"), None);
        assert_eq!(lookup_f64(&v, "/a/b").unwrap_or(-100.0), -100.0);
    }

    #[test]
    fn test_lookup_array_index() {
        let v = json!({"cloudLayers": [{"base": {"value": 760}}]});
        assert_eq!(lookup_f64(&v, "/cloudLayers/0/base/value"), Some(760.0));
        assert_eq!(lookup_f64(&v, "/cloudLayers/1/base/value"), None);
    }

    #[test]
    fn test_lookup_wrong_type_returns_none() {
        let v = json!({"a": "not a number"});
        assert_eq!(lookup_f64(&v, "/a"), None);
        assert_eq!(lookup_str(&v, "/a"), Some("not a number"));
    }
}
