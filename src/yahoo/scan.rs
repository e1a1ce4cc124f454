//! Tolerant deep traversal over provider payloads.

use serde_json::{Map, Value};

/// Depth-first scan yielding every JSON object for which `pred` holds,
/// parents before their children. Arrays are walked element-wise.
pub fn collect<'a, F>(root: &'a Value, pred: F) -> Vec<&'a Map<String, Value>>
where
    F: Fn(&Map<String, Value>) -> bool,
{
    fn walk<'a>(
        node: &'a Value,
        pred: &dyn Fn(&Map<String, Value>) -> bool,
        out: &mut Vec<&'a Map<String, Value>>,
    ) {
        match node {
            Value::Array(items) => {
                for item in items {
                    walk(item, pred, out);
                }
            }
            Value::Object(map) => {
                if pred(map) {
                    out.push(map);
                }
                for child in map.values() {
                    walk(child, pred, out);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    walk(root, &pred, &mut out);
    out
}

/// Best-effort string form of a scalar: strings pass through, numbers are
/// formatted (integers without a fraction). Anything else is `None`.
pub fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                Some(n.to_string())
            }
        }
        _ => None,
    }
}

/// Best-effort numeric value: numbers directly, numeric strings parsed.
pub fn scalar_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_finds_nested_objects() {
        let payload = json!({
            "a": [{"hit": 1}, {"miss": true}],
            "b": {"c": {"hit": 2, "d": [{"hit": 3}]}}
        });

        let found = collect(&payload, |o| o.contains_key("hit"));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_collect_parent_before_child() {
        let payload = json!({"hit": {"hit": "inner"}});
        let found = collect(&payload, |o| o.contains_key("hit"));
        assert_eq!(found.len(), 2);
        // The root object comes first
        assert!(found[0].get("hit").unwrap().is_object());
    }

    #[test]
    fn test_collect_ignores_scalars_and_nulls() {
        let payload = json!([1, "two", null, {"x": 1}]);
        let found = collect(&payload, |_| true);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_scalar_string() {
        assert_eq!(scalar_string(&json!("9004")), Some("9004".to_string()));
        assert_eq!(scalar_string(&json!(9004)), Some("9004".to_string()));
        assert_eq!(scalar_string(&json!(12.5)), Some("12.5".to_string()));
        assert_eq!(scalar_string(&json!(null)), None);
        assert_eq!(scalar_string(&json!([1])), None);
    }

    #[test]
    fn test_scalar_f64() {
        assert_eq!(scalar_f64(&json!(20)), Some(20.0));
        assert_eq!(scalar_f64(&json!("23.4")), Some(23.4));
        assert_eq!(scalar_f64(&json!(" 7 ")), Some(7.0));
        assert_eq!(scalar_f64(&json!("n/a")), None);
        assert_eq!(scalar_f64(&json!(true)), None);
    }
}
