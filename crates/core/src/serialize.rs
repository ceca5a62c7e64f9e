//! Projections of a [`PromptSpec`] for display and export.
//!
//! The compact projection prunes empty string and empty array leaves so
//! the live preview only shows what the user has actually filled in.
//! Pruning is per-field: a record whose fields are all pruned away is
//! still emitted as `{}` — object-valued fields are never dropped, only
//! string/array leaves are. Booleans (including `false`) and numbers
//! always survive.
//!
//! All projections are read-only over the snapshot and deterministic:
//! the same root yields byte-identical text on every call.

use serde_json::Value;

use crate::error::CoreError;
use crate::schema::PromptSpec;

/// Full JSON projection of the snapshot, nothing omitted.
pub fn to_value(spec: &PromptSpec) -> Result<Value, CoreError> {
    Ok(serde_json::to_value(spec)?)
}

/// Compact JSON projection: [`to_value`] with empty leaves pruned.
pub fn to_compact_value(spec: &PromptSpec) -> Result<Value, CoreError> {
    let mut value = to_value(spec)?;
    prune_empty(&mut value);
    Ok(value)
}

/// The display/export text: the compact projection, pretty-printed with
/// 2-space indentation. This is the verbatim payload for the clipboard
/// and for the downstream generation system.
pub fn to_display_text(spec: &PromptSpec) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(&to_compact_value(spec)?)?)
}

/// Lossless export: the full projection, pretty-printed.
pub fn to_json(spec: &PromptSpec) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Recursively remove empty-string and empty-array fields in place.
///
/// Children are pruned before the parent is filtered, so an array that
/// loses all its elements is itself dropped from its parent record.
fn prune_empty(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (_, field) in map.iter_mut() {
                prune_empty(field);
            }
            map.retain(|_, field| !is_empty_leaf(field));
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                prune_empty(item);
            }
            items.retain(|item| !is_empty_leaf(item));
        }
        _ => {}
    }
}

/// An empty string or an empty array. Everything else — `false`, `0`,
/// `null`, `{}` — is kept.
fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
