//! # AppError
//!
//! Centralized error handling for the forum domain. The variants map
//! one-to-one onto the outcomes the boundary layer must distinguish;
//! the boundary (not this crate) decides how each one is presented.

use thiserror::Error;

/// Raised by entity constructors when a payload fails validation.
///
/// The display form of each variant is the stable signal code the
/// boundary layer translates for users, e.g.
/// `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`. Presence is always checked
/// before type, so a payload that is both incomplete and mistyped
/// reports the missing property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A required field is absent, null, or an empty string.
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty(&'static str),

    /// All required fields are present but one has the wrong primitive type.
    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    TypeMismatch(&'static str),

    /// Username longer than the 50 character column limit.
    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    UsernameLimitChar,

    /// Username contains characters outside `[a-zA-Z0-9_]`.
    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    UsernameRestrictedCharacter,
}

/// The primary error type for all forum-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Entity payload validation failure (bad or missing input shape).
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A business invariant was violated (e.g. duplicate username,
    /// unknown refresh token). Surfaced as a 400 at the boundary.
    #[error("{0}")]
    Invariant(String),

    /// Referenced thread/comment/reply does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller could not be identified (bad credentials or token).
    #[error("{0}")]
    Unauthenticated(String),

    /// The caller is identified but is not the resource owner.
    #[error("{0}")]
    Forbidden(String),

    /// Infrastructure failure (e.g. database down). Details stay
    /// server-side.
    #[error("{0}")]
    Internal(String),
}

/// A specialized Result type for forum-core logic.
pub type Result<T> = std::result::Result<T, AppError>;
