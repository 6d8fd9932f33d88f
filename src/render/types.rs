//! Canonical type signatures.
//!
//! Schema types arrive either as a bare primitive name (`"string"`) or as a
//! tagged array (`["list", "string"]`, `["object", {...}]`). Object and tuple
//! members are never expanded; they collapse to fixed placeholders so deeply
//! nested compound types cannot blow up a template.

use serde_json::Value;

/// Signature for an object type of any shape.
pub const OBJECT_SIGNATURE: &str = "object({...})";

/// Signature for a tuple type of any shape.
pub const TUPLE_SIGNATURE: &str = "tuple([...])";

/// Signature for anything that is not a recognizable type expression.
pub const UNKNOWN_SIGNATURE: &str = "unknown";

/// Resolve a type expression to its canonical signature.
///
/// Never fails: unrecognized shapes (including a missing type) resolve to
/// [`UNKNOWN_SIGNATURE`].
pub fn resolve_type(expr: Option<&Value>) -> String {
    match expr {
        Some(Value::String(primitive)) => primitive.clone(),
        Some(Value::Array(parts)) => resolve_compound(parts),
        _ => UNKNOWN_SIGNATURE.to_string(),
    }
}

fn resolve_compound(parts: &[Value]) -> String {
    match parts.first().and_then(Value::as_str) {
        Some(kind @ ("list" | "set" | "map")) => {
            format!("{}({})", kind, resolve_type(parts.get(1)))
        }
        Some("object") => OBJECT_SIGNATURE.to_string(),
        Some("tuple") => TUPLE_SIGNATURE.to_string(),
        _ => UNKNOWN_SIGNATURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> String {
        resolve_type(Some(&value))
    }

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(resolve(json!("string")), "string");
        assert_eq!(resolve(json!("bool")), "bool");
        assert_eq!(resolve(json!("number")), "number");
        assert_eq!(resolve(json!("dynamic")), "dynamic");
    }

    #[test]
    fn test_primitive_resolution_is_idempotent() {
        for primitive in ["string", "bool", "number"] {
            let once = resolve(json!(primitive));
            let twice = resolve(Value::String(once.clone()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_collections_wrap_element_type() {
        assert_eq!(resolve(json!(["list", "string"])), "list(string)");
        assert_eq!(resolve(json!(["set", "number"])), "set(number)");
        assert_eq!(resolve(json!(["map", "bool"])), "map(bool)");
    }

    #[test]
    fn test_nested_collections_recurse() {
        assert_eq!(
            resolve(json!(["list", ["map", ["set", "string"]]])),
            "list(map(set(string)))"
        );
    }

    #[test]
    fn test_object_and_tuple_are_simplified() {
        assert_eq!(
            resolve(json!(["object", { "name": "string", "size": "number" }])),
            OBJECT_SIGNATURE
        );
        assert_eq!(resolve(json!(["tuple", ["string", "bool"]])), TUPLE_SIGNATURE);
        assert_eq!(
            resolve(json!(["list", ["object", { "a": "string" }]])),
            "list(object({...}))"
        );
    }

    #[test]
    fn test_unrecognized_shapes_are_unknown() {
        assert_eq!(resolve_type(None), UNKNOWN_SIGNATURE);
        assert_eq!(resolve(json!(42)), UNKNOWN_SIGNATURE);
        assert_eq!(resolve(json!({ "kind": "list" })), UNKNOWN_SIGNATURE);
        assert_eq!(resolve(json!([])), UNKNOWN_SIGNATURE);
        assert_eq!(resolve(json!(["function", "string"])), UNKNOWN_SIGNATURE);
    }

    #[test]
    fn test_collection_without_element_type() {
        assert_eq!(resolve(json!(["list"])), "list(unknown)");
    }
}
