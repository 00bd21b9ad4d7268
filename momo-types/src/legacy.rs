//! Result shapes for callers that expect plain JSON maps.
//!
//! `to_legacy_value` flattens any failure into `{"error": "<message>"}`, the
//! shape older integrations parse. `to_tagged_value` keeps the error kind.

use serde_json::{Value, json};

use crate::http::{Content, OperationResult};

fn content_value(content: &Content) -> Value {
    match content {
        Content::Json(v) => v.clone(),
        Content::Text(s) => Value::String(s.clone()),
    }
}

/// `{"statusCode": n, "content": ...}` or `{"error": "<message>"}`.
pub fn to_legacy_value(result: &OperationResult) -> Value {
    match result {
        Ok(resp) => json!({
            "statusCode": resp.status_code,
            "content": content_value(&resp.content),
        }),
        Err(err) => json!({ "error": err.to_string() }),
    }
}

/// Like `to_legacy_value`, but errors become
/// `{"error": {"kind": "...", "message": "..."}}`.
pub fn to_tagged_value(result: &OperationResult) -> Value {
    match result {
        Ok(_) => to_legacy_value(result),
        Err(err) => json!({
            "error": {
                "kind": err.kind(),
                "message": err.to_string(),
            }
        }),
    }
}
