//! Reply use cases. Unlike AddComment, a failed comment-existence check
//! here propagates unchanged rather than being rewrapped.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{AddedReply, NewReply};
use crate::error::Result;
use crate::traits::{CommentRepository, ReplyRepository};

pub struct AddReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { reply_repository, comment_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedReply> {
        let comment_id = payload.get("commentId").and_then(Value::as_str).unwrap_or_default();
        self.comment_repository.verify_comment_existence(comment_id).await?;

        let new_reply = NewReply::from_payload(payload)?;
        self.reply_repository.add_reply(new_reply).await
    }
}

pub struct DeleteReplyPayload {
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}

pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(reply_repository: Arc<dyn ReplyRepository>) -> Self {
        Self { reply_repository }
    }

    /// Same two-phase verification as DeleteComment.
    pub async fn execute(&self, payload: DeleteReplyPayload) -> Result<()> {
        self.reply_repository
            .verify_reply_existence_in_comment(&payload.reply_id, &payload.comment_id)
            .await?;
        self.reply_repository.verify_reply_owner(&payload.reply_id, &payload.owner).await?;
        self.reply_repository.delete_reply_by_id(&payload.reply_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use serde_json::json;

    use super::*;
    use crate::error::AppError;
    use crate::traits::{MockCommentRepository, MockReplyRepository};

    #[tokio::test]
    async fn add_reply_verifies_the_comment_before_persisting() {
        let payload = json!({
            "content": "reply_content",
            "commentId": "comment-123",
            "owner": "user-123",
        });

        let mut sequence = Sequence::new();
        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_verify_comment_existence()
            .withf(|comment_id| comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_add_reply()
            .withf(|new_reply| {
                new_reply
                    == &NewReply {
                        content: "reply_content".to_string(),
                        comment_id: "comment-123".to_string(),
                        owner: "user-123".to_string(),
                    }
            })
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| {
                Ok(AddedReply {
                    id: "reply-123".to_string(),
                    content: "reply_content".to_string(),
                    owner: "user-123".to_string(),
                })
            });

        let use_case =
            AddReplyUseCase::new(Arc::new(reply_repository), Arc::new(comment_repository));

        let added_reply = use_case.execute(&payload).await.unwrap();

        assert_eq!(
            added_reply,
            AddedReply {
                id: "reply-123".to_string(),
                content: "reply_content".to_string(),
                owner: "user-123".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn add_reply_propagates_the_comment_check_failure_unchanged() {
        let payload = json!({
            "content": "reply_content",
            "commentId": "comment-404",
            "owner": "user-123",
        });

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_verify_comment_existence()
            .times(1)
            .returning(|_| Err(AppError::NotFound("Komentar tidak ditemukan".to_string())));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository.expect_add_reply().times(0);

        let use_case =
            AddReplyUseCase::new(Arc::new(reply_repository), Arc::new(comment_repository));

        let err = use_case.execute(&payload).await.unwrap_err();

        assert_eq!(err, AppError::NotFound("Komentar tidak ditemukan".to_string()));
    }

    #[tokio::test]
    async fn delete_reply_verifies_then_deletes_in_order() {
        let mut sequence = Sequence::new();
        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_verify_reply_existence_in_comment()
            .withf(|reply_id, comment_id| reply_id == "reply-123" && comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(()));
        reply_repository
            .expect_verify_reply_owner()
            .withf(|reply_id, owner| reply_id == "reply-123" && owner == "user-123")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(()));
        reply_repository
            .expect_delete_reply_by_id()
            .withf(|reply_id| reply_id == "reply-123")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        let use_case = DeleteReplyUseCase::new(Arc::new(reply_repository));

        use_case
            .execute(DeleteReplyPayload {
                comment_id: "comment-123".to_string(),
                reply_id: "reply-123".to_string(),
                owner: "user-123".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_reply_stops_when_the_caller_is_not_the_owner() {
        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_verify_reply_existence_in_comment()
            .times(1)
            .returning(|_, _| Ok(()));
        reply_repository
            .expect_verify_reply_owner()
            .times(1)
            .returning(|_, _| Err(AppError::Forbidden("AuthorizationError".to_string())));
        reply_repository.expect_delete_reply_by_id().times(0);

        let use_case = DeleteReplyUseCase::new(Arc::new(reply_repository));

        let err = use_case
            .execute(DeleteReplyPayload {
                comment_id: "comment-123".to_string(),
                reply_id: "reply-123".to_string(),
                owner: "user-456".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Forbidden("AuthorizationError".to_string()));
    }
}
