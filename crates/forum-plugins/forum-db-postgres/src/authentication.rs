//! Refresh-token persistence against the `authentications` table.

use async_trait::async_trait;
use forum_core::error::{AppError, Result};
use forum_core::traits::AuthenticationRepository;
use sqlx::PgPool;

use crate::db_err;

pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn check_token_availability(&self, token: &str) -> Result<()> {
        sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .map(|_| ())
            .ok_or_else(|| {
                AppError::Invariant("refresh token tidak ditemukan di database".to_string())
            })
    }

    async fn delete_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
