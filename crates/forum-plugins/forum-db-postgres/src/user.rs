//! User persistence against the `users` table.

use async_trait::async_trait;
use forum_core::entities::{RegisterUser, RegisteredUser};
use forum_core::error::{AppError, Result};
use forum_core::traits::UserRepository;
use sqlx::{PgPool, Row};

use crate::{db_err, generate_id};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn add_user(
        &self,
        register_user: RegisterUser,
        password_hash: &str,
    ) -> Result<RegisteredUser> {
        let id = generate_id("user");

        let row = sqlx::query(
            "INSERT INTO users (id, username, password, fullname)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, fullname",
        )
        .bind(&id)
        .bind(&register_user.username)
        .bind(password_hash)
        .bind(&register_user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(RegisteredUser {
            id: row.get("id"),
            username: row.get("username"),
            fullname: row.get("fullname"),
        })
    }

    async fn verify_available_username(&self, username: &str) -> Result<()> {
        let taken = sqlx::query("SELECT username FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .is_some();

        if taken {
            return Err(AppError::Invariant("username tidak tersedia".to_string()));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::Invariant("username tidak ditemukan".to_string()))?;

        Ok(row.get("password"))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::Invariant("username tidak ditemukan".to_string()))?;

        Ok(row.get("id"))
    }
}
