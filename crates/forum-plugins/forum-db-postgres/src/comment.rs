//! Comment persistence against the `comments` table. Deletion is a
//! soft-delete flag flip; rows are never purged.

use async_trait::async_trait;
use forum_core::entities::{AddedComment, DetailComment, NewComment};
use forum_core::error::{AppError, Result};
use forum_core::traits::CommentRepository;
use sqlx::{PgPool, Row};

use crate::{db_err, generate_id, now_rfc3339};

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment> {
        let id = generate_id("comment");

        let row = sqlx::query(
            "INSERT INTO comments (id, content, thread_id, owner, date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_comment.content)
        .bind(&new_comment.thread_id)
        .bind(&new_comment.owner)
        .bind(now_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(AddedComment {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Komentar tidak ditemukan".to_string()));
        }
        Ok(())
    }

    /// Deleted rows stay in the listing; the use-case layer redacts
    /// their content instead.
    async fn get_comment_by_thread_id(&self, thread_id: &str) -> Result<Vec<DetailComment>> {
        let rows = sqlx::query(
            "SELECT comments.id, users.username, comments.date, comments.content,
                    comments.is_delete
             FROM comments
             LEFT JOIN users ON comments.owner = users.id
             WHERE comments.thread_id = $1
             ORDER BY comments.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| DetailComment {
                id: row.get("id"),
                username: row.get("username"),
                date: row.get("date"),
                content: row.get("content"),
                is_delete: row.get("is_delete"),
            })
            .collect())
    }

    async fn verify_comment_existence(&self, comment_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM comments WHERE id = $1 AND is_delete = FALSE")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Komentar tidak ditemukan".to_string()))
    }

    async fn verify_comment_existence_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()> {
        sqlx::query(
            "SELECT id FROM comments
             WHERE id = $1 AND thread_id = $2 AND is_delete = FALSE",
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound("Komentar tidak ditemukan".to_string()))
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::NotFound("Komentar tidak ditemukan".to_string()))?;

        let stored_owner: String = row.get("owner");
        if stored_owner != owner {
            return Err(AppError::Forbidden("AuthorizationError".to_string()));
        }
        Ok(())
    }
}
