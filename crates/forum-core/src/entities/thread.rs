//! Thread entity shapes: creation input, creation result, and read view.

use serde::Serialize;
use serde_json::Value;

use super::{str_field, verify_payload, Field};
use crate::error::EntityError;

/// Input to thread creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "NEW_THREAD",
            payload,
            &[Field::str("title"), Field::str("body"), Field::str("owner")],
        )?;

        Ok(Self {
            title: str_field(payload, "title"),
            body: str_field(payload, "body"),
            owner: str_field(payload, "owner"),
        })
    }
}

/// Result of thread creation, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "ADDED_THREAD",
            payload,
            &[Field::str("id"), Field::str("title"), Field::str("owner")],
        )?;

        Ok(Self {
            id: str_field(payload, "id"),
            title: str_field(payload, "title"),
            owner: str_field(payload, "owner"),
        })
    }
}

/// Read view of a thread. Comments are attached by the use case, never
/// by the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}

impl DetailThread {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "DETAIL_THREAD",
            payload,
            &[
                Field::str("id"),
                Field::str("title"),
                Field::str("body"),
                Field::str("date"),
                Field::str("username"),
            ],
        )?;

        Ok(Self {
            id: str_field(payload, "id"),
            title: str_field(payload, "title"),
            body: str_field(payload, "body"),
            date: str_field(payload, "date"),
            username: str_field(payload, "username"),
        })
    }
}
