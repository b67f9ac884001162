//! Thread persistence against the `threads` table.

use async_trait::async_trait;
use forum_core::entities::{AddedThread, DetailThread, NewThread};
use forum_core::error::{AppError, Result};
use forum_core::traits::ThreadRepository;
use sqlx::{PgPool, Row};

use crate::{db_err, generate_id, now_rfc3339};

pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread> {
        let id = generate_id("thread");

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .bind(now_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(AddedThread {
            id: row.get("id"),
            title: row.get("title"),
            owner: row.get("owner"),
        })
    }

    /// Joins `users` so the view carries a username, not an owner id.
    async fn get_detail_thread_by_id(&self, thread_id: &str) -> Result<DetailThread> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, users.username
             FROM threads
             LEFT JOIN users ON threads.owner = users.id
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .ok_or_else(|| AppError::NotFound("thread tidak ditemukan".to_string()))?;

        Ok(DetailThread {
            id: row.get("id"),
            title: row.get("title"),
            body: row.get("body"),
            date: row.get("date"),
            username: row.get("username"),
        })
    }

    async fn verify_thread_existence(&self, thread_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("thread tidak ditemukan".to_string()))
    }
}
