//! Tool input schemas and the validator that enforces them.
//!
//! A tool's argument type is the only description of its inputs: the schema advertised to
//! the host is generated from it, and incoming arguments are checked against that very
//! schema before they are deserialized.

use std::fmt;

use itertools::Itertools;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::{json, Map, Value};

pub type JsonObject = Map<String, Value>;

/// Generate the input schema advertised for an argument type.
///
/// Subschemas are inlined and optional fields keep their plain type, so the result is a
/// flat object schema that hosts and [`validate`] can read without resolving references.
pub fn input_schema<T: JsonSchema>() -> JsonObject {
    let settings = SchemaSettings::draft07().with(|s| {
        s.option_nullable = false;
        s.option_add_null_type = false;
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();

    let mut schema = match serde_json::to_value(root) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    };
    // The tool's own description replaces the type's rustdoc.
    schema.remove("title");
    schema.remove("description");
    schema.remove("definitions");
    schema
        .entry("type")
        .or_insert_with(|| Value::String("object".to_string()));
    schema.entry("properties").or_insert_with(|| json!({}));
    schema
}

/// One argument that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field, empty for the argument object itself.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every violation found in one argument bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![Violation {
            path: path.into(),
            message: message.into(),
        }])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Paths of all violated fields, in discovery order.
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.path.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check `value` against `schema`, collecting every violation rather than stopping at the
/// first one. No coercion is attempted: `"5"` is not a number and `5.0` is not an integer.
pub fn validate(schema: &JsonObject, value: &Value) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    check(schema, value, &mut Vec::new(), &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check(schema: &JsonObject, value: &Value, path: &mut Vec<String>, errors: &mut Vec<Violation>) {
    if let Some(expected) = schema.get("type") {
        let types: Vec<&str> = match expected {
            Value::String(t) => vec![t.as_str()],
            Value::Array(ts) => ts.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        if !types.is_empty() && !types.iter().any(|t| is_type(value, t)) {
            report(
                errors,
                path,
                format!("Expected {}, received {}", types.join(" | "), kind(value)),
            );
            return;
        }
    }

    if let Some(Value::Array(options)) = schema.get("enum") {
        if !options.contains(value) {
            report(
                errors,
                path,
                format!(
                    "Invalid enum value. Expected {}, received {}",
                    options.iter().map(quoted).join(" | "),
                    quoted(value)
                ),
            );
            return;
        }
    }

    match value {
        Value::Number(n) => {
            if let Some(n) = n.as_f64() {
                let (width_min, width_max) = width(schema);
                if let Some(min) = tighter(bound(schema, "minimum"), width_min, f64::max) {
                    if n < min {
                        report(errors, path, format!("Number must be greater than or equal to {}", number(min)));
                    }
                }
                if let Some(min) = bound(schema, "exclusiveMinimum") {
                    if n <= min {
                        report(errors, path, format!("Number must be greater than {}", number(min)));
                    }
                }
                if let Some(max) = tighter(bound(schema, "maximum"), width_max, f64::min) {
                    if n > max {
                        report(errors, path, format!("Number must be less than or equal to {}", number(max)));
                    }
                }
                if let Some(max) = bound(schema, "exclusiveMaximum") {
                    if n >= max {
                        report(errors, path, format!("Number must be less than {}", number(max)));
                    }
                }
            }
        }
        Value::String(s) => {
            let len = s.chars().count() as f64;
            if let Some(min) = bound(schema, "minLength") {
                if len < min {
                    report(errors, path, format!("String must contain at least {} character(s)", number(min)));
                }
            }
            if let Some(max) = bound(schema, "maxLength") {
                if len > max {
                    report(errors, path, format!("String must contain at most {} character(s)", number(max)));
                }
            }
        }
        Value::Array(items) => {
            let len = items.len() as f64;
            if let Some(min) = bound(schema, "minItems") {
                if len < min {
                    report(errors, path, format!("Array must contain at least {} element(s)", number(min)));
                }
            }
            if let Some(max) = bound(schema, "maxItems") {
                if len > max {
                    report(errors, path, format!("Array must contain at most {} element(s)", number(max)));
                }
            }
            if let Some(Value::Object(item_schema)) = schema.get("items") {
                for (index, item) in items.iter().enumerate() {
                    path.push(index.to_string());
                    check(item_schema, item, path, errors);
                    path.pop();
                }
            }
        }
        Value::Object(fields) => {
            if let Some(Value::Array(required)) = schema.get("required") {
                for name in required.iter().filter_map(Value::as_str) {
                    if !fields.contains_key(name) {
                        path.push(name.to_string());
                        report(errors, path, "Required".to_string());
                        path.pop();
                    }
                }
            }
            if let Some(Value::Object(properties)) = schema.get("properties") {
                for (name, field_schema) in properties {
                    if let (Some(field), Value::Object(field_schema)) = (fields.get(name), field_schema) {
                        path.push(name.clone());
                        check(field_schema, field, path, errors);
                        path.pop();
                    }
                }
            }
        }
        _ => {}
    }

    if let Some(Value::Array(all)) = schema.get("allOf") {
        for sub in all.iter().filter_map(Value::as_object) {
            check(sub, value, path, errors);
        }
    }

    for key in ["anyOf", "oneOf"] {
        if let Some(Value::Array(branches)) = schema.get(key) {
            let matched = branches.iter().filter_map(Value::as_object).any(|sub| {
                let mut scratch = Vec::new();
                check(sub, value, &mut path.clone(), &mut scratch);
                scratch.is_empty()
            });
            if !matched {
                report(errors, path, "Invalid input".to_string());
            }
        }
    }
}

fn report(errors: &mut Vec<Violation>, path: &[String], message: String) {
    errors.push(Violation {
        path: path.join("."),
        message,
    });
}

fn is_type(value: &Value, expected: &str) -> bool {
    match expected {
        "null" => value.is_null(),
        "boolean" => value.is_boolean(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => true,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn bound(schema: &JsonObject, key: &str) -> Option<f64> {
    schema.get(key).and_then(Value::as_f64)
}

/// Range implied by an integer `format`, so values that cannot fit the field are reported
/// against its path instead of failing later in deserialization.
fn width(schema: &JsonObject) -> (Option<f64>, Option<f64>) {
    let range = match schema.get("format").and_then(Value::as_str) {
        Some("uint8") => (0.0, u8::MAX as f64),
        Some("uint16") => (0.0, u16::MAX as f64),
        Some("uint32") => (0.0, u32::MAX as f64),
        Some("uint64") => (0.0, u64::MAX as f64),
        Some("int8") => (i8::MIN as f64, i8::MAX as f64),
        Some("int16") => (i16::MIN as f64, i16::MAX as f64),
        Some("int32") => (i32::MIN as f64, i32::MAX as f64),
        Some("int64") => (i64::MIN as f64, i64::MAX as f64),
        _ => return (None, None),
    };
    (Some(range.0), Some(range.1))
}

fn tighter(declared: Option<f64>, implied: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (declared, implied) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, b) => a.or(b),
    }
}

fn number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> JsonObject {
        json!({
            "type": "object",
            "properties": {
                "limit": { "type": "integer", "minimum": 1.0, "maximum": 100.0 },
                "order": { "type": "string", "enum": ["ASC", "DESC"] },
                "codes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 2,
                    "maxItems": 5
                }
            },
            "required": ["codes"]
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn accepts_valid_arguments() {
        let args = json!({ "limit": 5, "order": "ASC", "codes": ["AAK", "TCD"] });
        assert!(validate(&schema(), &args).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let args = json!({ "limit": 0, "order": "asc" });
        let errors = validate(&schema(), &args).unwrap_err();
        assert_eq!(errors.paths(), vec!["codes", "limit", "order"]);
        assert_eq!(
            errors.to_string(),
            "codes: Required, \
             limit: Number must be greater than or equal to 1, \
             order: Invalid enum value. Expected 'ASC' | 'DESC', received 'asc'"
        );
    }

    #[test]
    fn does_not_coerce_types() {
        let args = json!({ "limit": "5", "codes": ["AAK", 7] });
        let errors = validate(&schema(), &args).unwrap_err();
        assert_eq!(errors.paths(), vec!["limit", "codes.1"]);
        assert_eq!(
            errors.violations()[0].message,
            "Expected integer, received string"
        );

        let errors = validate(&schema(), &json!({ "limit": 5.0, "codes": ["A", "B"] })).unwrap_err();
        assert_eq!(errors.to_string(), "limit: Expected integer, received number");
    }

    #[test]
    fn enforces_array_length() {
        let errors = validate(&schema(), &json!({ "codes": ["A"] })).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "codes: Array must contain at least 2 element(s)"
        );

        let errors =
            validate(&schema(), &json!({ "codes": ["A", "B", "C", "D", "E", "F"] })).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "codes: Array must contain at most 5 element(s)"
        );
    }

    #[test]
    fn integer_format_bounds_the_field_width() {
        let schema = json!({
            "type": "object",
            "properties": {
                "page": { "type": "integer", "format": "uint32", "minimum": 1.0 },
                "month": { "type": "integer", "format": "uint8", "minimum": 1.0, "maximum": 12.0 },
                "year": { "type": "integer", "format": "int32", "minimum": 2000.0 }
            }
        })
        .as_object()
        .cloned()
        .unwrap();

        let args = json!({ "page": 5_000_000_000u64, "month": 300, "year": 3_000_000_000u64 });
        let errors = validate(&schema, &args).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "page: Number must be less than or equal to 4294967295, \
             month: Number must be less than or equal to 12, \
             year: Number must be less than or equal to 2147483647"
        );
        assert!(validate(&schema, &json!({ "page": 4_294_967_295u64 })).is_ok());
    }

    #[test]
    fn rejects_non_object_arguments() {
        let errors = validate(&schema(), &json!([1, 2])).unwrap_err();
        assert_eq!(errors.to_string(), "Expected object, received array");
    }
}
