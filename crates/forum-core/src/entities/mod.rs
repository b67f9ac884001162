//! # Domain Entities
//!
//! Immutable records for each resource shape, validated at construction.
//! Every `from_payload` constructor runs the same two-phase check over a
//! loosely typed JSON payload: first presence of every required field,
//! then primitive type conformance. The phases never mix, so an
//! incomplete payload always reports the missing property even when
//! another field is also mistyped.

pub mod comment;
pub mod reply;
pub mod thread;
pub mod user;

pub use comment::*;
pub use reply::*;
pub use thread::*;
pub use user::*;

use serde_json::Value;

use crate::error::EntityError;

/// Expected primitive type of a payload field.
#[derive(Clone, Copy)]
pub(crate) enum FieldKind {
    Str,
    Bool,
}

/// One entry in an entity's required-field set.
pub(crate) struct Field {
    name: &'static str,
    kind: FieldKind,
}

impl Field {
    pub(crate) const fn str(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Str }
    }

    pub(crate) const fn bool(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Bool }
    }
}

/// Two-phase payload check shared by every entity constructor.
///
/// Presence for string fields means the value is truthy: absent, null,
/// the empty string, `false`, and the number zero all count as missing.
/// Boolean fields only need the key to exist and be non-null, so a
/// present `false` passes.
pub(crate) fn verify_payload(
    tag: &'static str,
    payload: &Value,
    fields: &[Field],
) -> Result<(), EntityError> {
    for field in fields {
        let present = match (field.kind, payload.get(field.name)) {
            (_, None) | (_, Some(Value::Null)) => false,
            (FieldKind::Str, Some(Value::String(s))) => !s.is_empty(),
            (FieldKind::Str, Some(Value::Bool(b))) => *b,
            (FieldKind::Str, Some(Value::Number(n))) => n.as_f64() != Some(0.0),
            (_, Some(_)) => true,
        };
        if !present {
            return Err(EntityError::MissingProperty(tag));
        }
    }

    for field in fields {
        let matches_kind = match field.kind {
            FieldKind::Str => payload[field.name].is_string(),
            FieldKind::Bool => payload[field.name].is_boolean(),
        };
        if !matches_kind {
            return Err(EntityError::TypeMismatch(tag));
        }
    }

    Ok(())
}

/// Extracts a string field after `verify_payload` has vouched for it.
pub(crate) fn str_field(payload: &Value, name: &str) -> String {
    payload[name].as_str().unwrap_or_default().to_string()
}

/// Extracts a boolean field after `verify_payload` has vouched for it.
pub(crate) fn bool_field(payload: &Value, name: &str) -> bool {
    payload[name].as_bool().unwrap_or_default()
}
