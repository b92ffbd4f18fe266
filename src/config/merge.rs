use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Recursively merges `overrides` onto `target`.
///
/// Objects merge key by key; every other override value replaces the target
/// leaf. Keys spelled in camelCase land on the matching snake_case key when
/// the target already has one; unknown keys are inserted unchanged.
///
/// Keys present in `schema` are typed: a `null`, a value of another JSON kind
/// or an unparsable color string is reported and skipped so the target keeps
/// its value. String leaves of the schema are colors.
pub(crate) fn merge_overrides(
    target: &mut Value,
    overrides: &Value,
    schema: &Value,
) -> PlotResult<()> {
    match (target, overrides) {
        (_, Value::Null) => Ok(()),
        (Value::Object(target), Value::Object(overrides)) => {
            merge_object(target, overrides, schema.as_object(), "");
            Ok(())
        }
        (_, other) => Err(PlotError::InvalidConfig(format!(
            "overrides must be an object, got {}",
            json_kind(other)
        ))),
    }
}

fn merge_object(
    target: &mut Map<String, Value>,
    overrides: &Map<String, Value>,
    schema: Option<&Map<String, Value>>,
    prefix: &str,
) {
    for (raw_key, value) in overrides {
        let key = canonical_key(target, raw_key);
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        if value.is_null() {
            let err = PlotError::InvalidConfigValue { field };
            warn!(error = %err, "skipping configuration value, keeping previous value");
            continue;
        }

        let expected = schema.and_then(|schema| schema.get(&key));
        if let Some(cause) = expected.and_then(|expected| leaf_mismatch(expected, value)) {
            let err = PlotError::InvalidConfigValue { field };
            warn!(error = %err, %cause, "skipping configuration value, keeping previous value");
            continue;
        }

        if let (Some(Value::Object(existing)), Value::Object(nested)) = (target.get_mut(&key), value)
        {
            let nested_schema = expected.and_then(Value::as_object);
            merge_object(existing, nested, nested_schema, &field);
            continue;
        }
        target.insert(key, value.clone());
    }
}

fn leaf_mismatch(expected: &Value, value: &Value) -> Option<String> {
    match (expected, value) {
        (Value::Object(_), Value::Object(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::Bool(_), Value::Bool(_)) => None,
        (Value::String(_), Value::String(text)) => {
            Color::parse(text).err().map(|err| err.to_string())
        }
        _ => Some(format!(
            "expected {}, got {}",
            json_kind(expected),
            json_kind(value)
        )),
    }
}

fn canonical_key(target: &Map<String, Value>, raw_key: &str) -> String {
    if target.contains_key(raw_key) {
        return raw_key.to_owned();
    }
    let snake = to_snake_case(raw_key);
    if target.contains_key(&snake) {
        snake
    } else {
        raw_key.to_owned()
    }
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{merge_overrides, to_snake_case};

    fn merge(target: &mut Value, overrides: &Value) {
        let schema = json!({
            "axes": { "scale": 40.0, "show_x": true, "stroke_color": "#000000" },
            "graph": { "line_width": 3.0 }
        });
        merge_overrides(target, overrides, &schema).expect("merge");
    }

    #[test]
    fn camel_case_keys_are_mapped_to_snake_case() {
        assert_eq!(to_snake_case("xOffset"), "x_offset");
        assert_eq!(to_snake_case("showNegativeX"), "show_negative_x");
        assert_eq!(to_snake_case("scale"), "scale");
    }

    #[test]
    fn merge_is_deep_and_keeps_siblings() {
        let mut target = json!({ "axes": { "scale": 40.0, "show_negative_x": true } });
        merge(&mut target, &json!({ "axes": { "scale": 80.0 } }));
        assert_eq!(
            target,
            json!({ "axes": { "scale": 80.0, "show_negative_x": true } })
        );
    }

    #[test]
    fn null_leaves_are_skipped() {
        let mut target = json!({ "graph": { "line_width": 3.0 } });
        merge(&mut target, &json!({ "graph": { "lineWidth": null } }));
        assert_eq!(target, json!({ "graph": { "line_width": 3.0 } }));
    }

    #[test]
    fn mistyped_known_leaves_are_skipped() {
        let mut target = json!({
            "axes": { "scale": 40.0, "show_x": true, "stroke_color": "#000000" },
            "graph": { "line_width": 3.0 }
        });
        merge(
            &mut target,
            &json!({
                "axes": { "scale": "big", "showX": 1, "strokeColor": "red" },
                "graph": [2]
            }),
        );
        assert_eq!(
            target,
            json!({
                "axes": { "scale": 40.0, "show_x": true, "stroke_color": "red" },
                "graph": { "line_width": 3.0 }
            })
        );

        merge(&mut target, &json!({ "axes": { "strokeColor": "not-a-color" } }));
        assert_eq!(target["axes"]["stroke_color"], json!("red"));
    }

    #[test]
    fn unknown_keys_are_inserted_verbatim() {
        let mut target = json!({ "graph": {} });
        merge(&mut target, &json!({ "graph": { "dashPattern": [2, 4] } }));
        assert_eq!(target, json!({ "graph": { "dashPattern": [2, 4] } }));

        merge(&mut target, &json!({ "graph": { "dashPattern": "none" } }));
        assert_eq!(target["graph"]["dashPattern"], json!("none"));
    }

    #[test]
    fn non_object_overrides_are_rejected() {
        let mut target = json!({});
        assert!(merge_overrides(&mut target, &json!([1, 2]), &json!({})).is_err());
        assert!(merge_overrides(&mut target, &json!(null), &json!({})).is_ok());
    }
}
