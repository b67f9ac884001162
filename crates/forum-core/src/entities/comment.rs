//! Comment entity shapes. `DetailComment.is_delete` drives content
//! redaction in the use-case layer and is never exposed outward.

use serde::Serialize;
use serde_json::Value;

use super::{bool_field, str_field, verify_payload, Field};
use crate::error::EntityError;

/// Input to comment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl NewComment {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "NEW_COMMENT",
            payload,
            &[Field::str("content"), Field::str("threadId"), Field::str("owner")],
        )?;

        Ok(Self {
            content: str_field(payload, "content"),
            thread_id: str_field(payload, "threadId"),
            owner: str_field(payload, "owner"),
        })
    }
}

/// Result of comment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "ADDED_COMMENT",
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

/// Read view of a comment as stored, soft-delete flag included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub is_delete: bool,
}

impl DetailComment {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "DETAIL_COMMENT",
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
