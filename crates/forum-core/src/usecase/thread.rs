//! Thread use cases: creation and the detail view with embedded,
//! redacted comments.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::entities::{AddedThread, DetailComment, DetailThread, NewThread};
use crate::error::Result;
use crate::traits::{CommentRepository, ThreadRepository};

/// Substituted for the content of a soft-deleted comment in the detail
/// view.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread> {
        let new_thread = NewThread::from_payload(payload)?;
        self.thread_repository.add_thread(new_thread).await
    }
}

/// Outward view of one comment inside a thread detail. Deleted content
/// is already redacted and the soft-delete flag is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInThread {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

impl From<DetailComment> for CommentInThread {
    fn from(comment: DetailComment) -> Self {
        Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content: if comment.is_delete {
                DELETED_COMMENT_PLACEHOLDER.to_string()
            } else {
                comment.content
            },
        }
    }
}

/// A thread merged with its redacted comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub thread: DetailThread,
    pub comments: Vec<CommentInThread>,
}

pub struct GetDetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetDetailThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    /// A NotFound from the thread lookup propagates unchanged.
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        let thread = self.thread_repository.get_detail_thread_by_id(thread_id).await?;
        let comments = self.comment_repository.get_comment_by_thread_id(thread_id).await?;

        Ok(ThreadDetail {
            thread,
            comments: comments.into_iter().map(CommentInThread::from).collect(),
        })
    }
}
