use crate::ast::Value;
use crate::scan::VarDecl;

/// Coerce a scanned assignment into a typed value.
pub(super) fn coerce(decl: &VarDecl) -> Value {
    if decl.is_array {
        coerce_array(&decl.raw)
    } else {
        coerce_scalar(&decl.raw)
    }
}

/// Quote check first, then numeric parse, then the literal text as a
/// string. Embedded quotes pass through verbatim; there is no escape
/// processing in this language.
fn coerce_scalar(raw: &str) -> Value {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Value::String(raw[1..raw.len() - 1].to_string());
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::String(raw.to_string()),
    }
}

/// One outer brace pair stripped, elements split on commas outside
/// quotes, each trimmed and coerced as a scalar.
fn coerce_array(raw: &str) -> Value {
    let inner = strip_outer_braces(raw);
    if inner.trim().is_empty() {
        return Value::Array(Vec::new());
    }
    let elements = split_elements(inner)
        .into_iter()
        .map(|element| coerce_scalar(element.trim()))
        .collect();
    Value::Array(elements)
}

fn strip_outer_braces(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed)
}

fn split_elements(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => in_string = !in_string,
            ',' if !in_string => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
