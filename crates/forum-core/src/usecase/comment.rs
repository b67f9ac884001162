//! Comment use cases: creation behind a thread-existence gate and the
//! two-phase verified soft delete.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{AddedComment, NewComment};
use crate::error::{AppError, Result};
use crate::traits::{CommentRepository, ThreadRepository};

pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self { comment_repository, thread_repository }
    }

    /// Whatever the thread-existence check fails with is normalized into
    /// one fixed not-found signal; the creation call never runs after a
    /// failed check.
    pub async fn execute(&self, payload: &Value) -> Result<AddedComment> {
        let thread_id = payload.get("threadId").and_then(Value::as_str).unwrap_or_default();
        if self.thread_repository.verify_thread_existence(thread_id).await.is_err() {
            return Err(AppError::NotFound(
                "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND".to_string(),
            ));
        }

        let new_comment = NewComment::from_payload(payload)?;
        self.comment_repository.add_comment(new_comment).await
    }
}

pub struct DeleteCommentPayload {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// Existence then ownership then deletion, in that order; the delete
    /// never runs unless both verifications pass.
    pub async fn execute(&self, payload: DeleteCommentPayload) -> Result<()> {
        self.comment_repository
            .verify_comment_existence_in_thread(&payload.comment_id, &payload.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(&payload.comment_id, &payload.owner)
            .await?;
        self.comment_repository.delete_comment_by_id(&payload.comment_id).await
    }
}
