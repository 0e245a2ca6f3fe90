use serde_json::{Map, Value};

use crate::Reflect;

/// Parses a string value holding a JSON object.
///
/// Returns `None` for non-string values, empty strings, invalid JSON and JSON
/// that is not an object.
pub(crate) fn expand_json(value: &dyn Reflect) -> Option<Value> {
    let text = value.reflect_str().filter(|text| !text.is_empty())?;
    let object = serde_json::from_str::<Map<String, Value>>(text).ok()?;
    log::debug!(
        "expanded a string of {} bytes into a JSON object of {} keys",
        text.len(),
        object.len(),
    );
    Some(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use serde_json::json;

    use super::expand_json;

    #[test]
    fn only_objects_expand() {
        let text = String::from(r#"{"String":"Abc","Nested":{"n":1}}"#);
        assert_eq!(
            expand_json(&text),
            Some(json!({ "String": "Abc", "Nested": { "n": 1 } })),
        );

        assert_eq!(expand_json(&String::new()), None);
        assert_eq!(expand_json(&String::from("[1, 2]")), None);
        assert_eq!(expand_json(&String::from("42")), None);
        assert_eq!(expand_json(&String::from("{ broken")), None);
        assert_eq!(expand_json(&vec![String::from("{}")]), None);
    }

    #[test]
    fn json_strings_expand_too() {
        let inner = json!(r#"{"a":true}"#);
        assert_eq!(expand_json(&inner), Some(json!({ "a": true })));
        assert_eq!(expand_json(&json!({ "a": 1 })), None);
    }
}
