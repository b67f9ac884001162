//! Reply persistence against the `replies` table. Mirrors the comment
//! adapter one level down.

use async_trait::async_trait;
use forum_core::entities::{AddedReply, DetailReply, NewReply};
use forum_core::error::{AppError, Result};
use forum_core::traits::ReplyRepository;
use sqlx::{PgPool, Row};

use crate::{db_err, generate_id, now_rfc3339};

pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, new_reply: NewReply) -> Result<AddedReply> {
        let id = generate_id("reply");

        let row = sqlx::query(
            "INSERT INTO replies (id, content, comment_id, owner, date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_reply.content)
        .bind(&new_reply.comment_id)
        .bind(&new_reply.owner)
        .bind(now_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(AddedReply {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Balasan tidak ditemukan".to_string()));
        }
        Ok(())
    }

    async fn get_reply_by_comment_id(&self, comment_id: &str) -> Result<Vec<DetailReply>> {
        let rows = sqlx::query(
            "SELECT replies.id, users.username, replies.date, replies.content,
                    replies.is_delete
             FROM replies
             LEFT JOIN users ON replies.owner = users.id
             WHERE replies.comment_id = $1
             ORDER BY replies.date ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| DetailReply {
                id: row.get("id"),
                username: row.get("username"),
                date: row.get("date"),
                content: row.get("content"),
                is_delete: row.get("is_delete"),
            })
            .collect())
    }

    async fn verify_reply_existence_in_comment(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<()> {
        sqlx::query(
            "SELECT id FROM replies
             WHERE id = $1 AND comment_id = $2 AND is_delete = FALSE",
        )
        .bind(reply_id)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound("Balasan tidak ditemukan".to_string()))
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::NotFound("Balasan tidak ditemukan".to_string()))?;

        let stored_owner: String = row.get("owner");
        if stored_owner != owner {
            return Err(AppError::Forbidden("AuthorizationError".to_string()));
        }
        Ok(())
    }
}
