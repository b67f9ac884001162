//! # Core Traits (Ports)
//!
//! Capability contracts the use cases depend on. Any infrastructure
//! adapter must implement these to be wired into the binary; forgetting
//! an operation is a compile error, not a runtime guard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{
    AddedComment, AddedReply, AddedThread, DetailComment, DetailReply, DetailThread, NewComment,
    NewReply, NewThread, RegisterUser, RegisteredUser,
};
use crate::error::Result;

/// Persistence contract for threads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persists the thread and returns the created record with its
    /// generated id.
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread>;

    /// Fails NotFound when the thread does not exist.
    async fn get_detail_thread_by_id(&self, thread_id: &str) -> Result<DetailThread>;

    /// Fails NotFound when the thread does not exist.
    async fn verify_thread_existence(&self, thread_id: &str) -> Result<()>;
}

/// Persistence contract for comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment>;

    /// Marks the row deleted; never purges it.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()>;

    /// Comments of a thread in creation order, ascending, deleted rows
    /// included.
    async fn get_comment_by_thread_id(&self, thread_id: &str) -> Result<Vec<DetailComment>>;

    /// Fails NotFound when the comment does not exist or is soft-deleted.
    async fn verify_comment_existence(&self, comment_id: &str) -> Result<()>;

    /// Fails NotFound when the comment does not live in the thread or is
    /// soft-deleted.
    async fn verify_comment_existence_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()>;

    /// Fails Forbidden when the caller is not the stored owner.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()>;
}

/// Persistence contract for replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: NewReply) -> Result<AddedReply>;

    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<()>;

    /// Replies of a comment in creation order, ascending.
    async fn get_reply_by_comment_id(&self, comment_id: &str) -> Result<Vec<DetailReply>>;

    async fn verify_reply_existence_in_comment(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<()>;

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<()>;
}

/// Persistence contract for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists the user with the already-hashed password.
    async fn add_user(
        &self,
        register_user: RegisterUser,
        password_hash: &str,
    ) -> Result<RegisteredUser>;

    /// Fails Invariant when the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<()>;

    async fn get_password_by_username(&self, username: &str) -> Result<String>;

    async fn get_id_by_username(&self, username: &str) -> Result<String>;
}

/// Persistence contract for issued refresh tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<()>;

    /// Fails Invariant when the token was never issued or was revoked.
    async fn check_token_availability(&self, token: &str) -> Result<()>;

    async fn delete_token(&self, token: &str) -> Result<()>;
}

/// Password hashing contract. Hashing is CPU-bound and synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    /// Fails Unauthenticated when the plain password does not match.
    fn compare(&self, plain: &str, hashed: &str) -> Result<()>;
}

/// Claims carried by both token kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Token issuing and verification contract.
#[cfg_attr(test, mockall::automock)]
pub trait AuthTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String>;

    /// Fails Unauthenticated when the token is missing, expired, or was
    /// not signed with the access key.
    fn verify_access_token(&self, token: &str) -> Result<TokenPayload>;

    /// Fails Invariant when the token was not signed with the refresh key.
    fn verify_refresh_token(&self, token: &str) -> Result<()>;

    /// Decodes refresh-token claims without re-checking the signature
    /// policy beyond `verify_refresh_token`.
    fn decode_payload(&self, token: &str) -> Result<TokenPayload>;
}
