//! # forum-db-postgres
//!
//! sqlx/Postgres implementation of every forum-core repository contract.
//! This crate owns the id format (`thread-<uuid>` and friends), the
//! stored date representation, and the soft-delete semantics; the core
//! never sees SQL.

pub mod authentication;
pub mod comment;
pub mod reply;
pub mod thread;
pub mod user;

pub use authentication::PgAuthenticationRepository;
pub use comment::PgCommentRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;

use forum_core::error::AppError;

/// Embedded migrations, run by the binary at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Ids are time-ordered so creation-order listings can simply sort.
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::now_v7())
}

/// Stored `date` values are RFC 3339 text; read views treat them as
/// opaque strings.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub(crate) fn db_err(err: sqlx::Error) -> AppError {
    AppError::Internal(err.to_string())
}
