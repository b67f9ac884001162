//! Reply entity shapes. Replies hang off comments and follow the same
//! soft-delete redaction rule.

use serde::Serialize;
use serde_json::Value;

use super::{bool_field, str_field, verify_payload, Field};
use crate::error::EntityError;

/// Input to reply creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub comment_id: String,
    pub owner: String,
}

impl NewReply {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "NEW_REPLY",
            payload,
            &[Field::str("content"), Field::str("commentId"), Field::str("owner")],
        )?;

        Ok(Self {
            content: str_field(payload, "content"),
            comment_id: str_field(payload, "commentId"),
            owner: str_field(payload, "owner"),
        })
    }
}

/// Result of reply creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "ADDED_REPLY",
            payload,
            &[Field::str("id"), Field::str("content"), Field::str("owner")],
        )?;

        Ok(Self {
            id: str_field(payload, "id"),
            content: str_field(payload, "content"),
            owner: str_field(payload, "owner"),
        })
    }
}

/// Read view of a reply as stored, soft-delete flag included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailReply {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub is_delete: bool,
}

impl DetailReply {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "DETAIL_REPLY",
            payload,
            &[
                Field::str("id"),
                Field::str("username"),
                Field::str("date"),
                Field::str("content"),
                Field::bool("is_delete"),
            ],
        )?;

        Ok(Self {
            id: str_field(payload, "id"),
            username: str_field(payload, "username"),
            date: str_field(payload, "date"),
            content: str_field(payload, "content"),
            is_delete: bool_field(payload, "is_delete"),
        })
    }
}
