//! Placeholder values for attribute assignments.

use serde_json::Value;

/// Synthesize the right-hand side of `name = <value>`.
///
/// Rules, first match wins:
/// 1. a declared default renders as its JSON literal
/// 2. `*_name` renders as a reference `<provider>_<stem>.example.name`
/// 3. `*_id` renders as a reference `<provider>_<stem>.example.id`
/// 4. otherwise an empty value chosen from the type signature
pub fn placeholder(signature: &str, name: &str, default: Option<&Value>, provider: &str) -> String {
    if let Some(default) = default {
        return default.to_string();
    }

    if let Some(stem) = name.strip_suffix("_name") {
        return format!("{}_{}.example.name", provider, stem);
    }
    if let Some(stem) = name.strip_suffix("_id") {
        return format!("{}_{}.example.id", provider, stem);
    }

    empty_value(signature).to_string()
}

/// Empty literal for a type signature.
fn empty_value(signature: &str) -> &'static str {
    match signature {
        "string" => r#""""#,
        "bool" => "false",
        "number" => "0",
        s if s.starts_with("list") || s.starts_with("set") => "[]",
        s if s.starts_with("map") || s.starts_with("object") => "{}",
        s if s.starts_with("tuple") => "[]",
        _ => "null",
    }
}
