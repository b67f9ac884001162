//! User and authentication entity shapes.

use serde::Serialize;
use serde_json::Value;

use super::{str_field, verify_payload, Field};
use crate::error::EntityError;

/// Input to user registration. Beyond the shared two-phase check the
/// username must fit the 50 character column and contain only word
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "REGISTER_USER",
            payload,
            &[Field::str("username"), Field::str("password"), Field::str("fullname")],
        )?;

        let username = str_field(payload, "username");

        if username.chars().count() > 50 {
            return Err(EntityError::UsernameLimitChar);
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(EntityError::UsernameRestrictedCharacter);
        }

        Ok(Self {
            username,
            password: str_field(payload, "password"),
            fullname: str_field(payload, "fullname"),
        })
    }
}

/// Result of user registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "REGISTERED_USER",
            payload,
            &[Field::str("id"), Field::str("username"), Field::str("fullname")],
        )?;

        Ok(Self {
            id: str_field(payload, "id"),
            username: str_field(payload, "username"),
            fullname: str_field(payload, "fullname"),
        })
    }
}

/// Login credentials as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(
            "USER_LOGIN",
            payload,
            &[Field::str("username"), Field::str("password")],
        )?;

        Ok(Self {
            username: str_field(payload, "username"),
            password: str_field(payload, "password"),
        })
    }
}

/// Token pair handed out on a successful login. Built internally, never
/// payload-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}
