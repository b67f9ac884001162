//! # Forum Server Binary
//!
//! The entry point that wires the Postgres and JWT adapters into the use
//! cases and serves the HTTP API.

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use forum_api::configure_routes;
use forum_api::handlers::AppState;
use forum_auth_jwt::{Argon2PasswordHasher, JwtTokenManager};
use forum_core::traits::{
    AuthTokenManager, AuthenticationRepository, CommentRepository, PasswordHasher, ReplyRepository,
    ThreadRepository, UserRepository,
};
use forum_core::usecase::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetDetailThreadUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshAuthenticationUseCase,
};
use forum_db_postgres::{
    PgAuthenticationRepository, PgCommentRepository, PgReplyRepository, PgThreadRepository,
    PgUserRepository, MIGRATOR,
};
use sqlx::postgres::PgPoolOptions;

fn required_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = required_env("DATABASE_URL")?;
    let access_token_key = required_env("ACCESS_TOKEN_KEY")?;
    let refresh_token_key = required_env("REFRESH_TOKEN_KEY")?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .context("PORT must be a number")?;
    let access_token_age_secs: i64 = std::env::var("ACCESS_TOKEN_AGE")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .context("ACCESS_TOKEN_AGE must be a number of seconds")?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")?;
    MIGRATOR.run(&pool).await.context("failed to run migrations")?;

    let thread_repository: Arc<dyn ThreadRepository> =
        Arc::new(PgThreadRepository::new(pool.clone()));
    let comment_repository: Arc<dyn CommentRepository> =
        Arc::new(PgCommentRepository::new(pool.clone()));
    let reply_repository: Arc<dyn ReplyRepository> = Arc::new(PgReplyRepository::new(pool.clone()));
    let user_repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let authentication_repository: Arc<dyn AuthenticationRepository> =
        Arc::new(PgAuthenticationRepository::new(pool));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn AuthTokenManager> = Arc::new(JwtTokenManager::new(
        &access_token_key,
        &refresh_token_key,
        access_token_age_secs,
    ));

    let state = web::Data::new(AppState {
        add_user: AddUserUseCase::new(user_repository.clone(), password_hasher.clone()),
        login_user: LoginUserUseCase::new(
            user_repository,
            authentication_repository.clone(),
            token_manager.clone(),
            password_hasher,
        ),
        refresh_authentication: RefreshAuthenticationUseCase::new(
            authentication_repository.clone(),
            token_manager.clone(),
        ),
        logout_user: LogoutUserUseCase::new(authentication_repository),
        add_thread: AddThreadUseCase::new(thread_repository.clone()),
        get_detail_thread: GetDetailThreadUseCase::new(
            thread_repository.clone(),
            comment_repository.clone(),
        ),
        add_comment: AddCommentUseCase::new(comment_repository.clone(), thread_repository),
        delete_comment: DeleteCommentUseCase::new(comment_repository.clone()),
        add_reply: AddReplyUseCase::new(reply_repository.clone(), comment_repository),
        delete_reply: DeleteReplyUseCase::new(reply_repository),
        token_manager,
    });

    log::info!("forum server starting on http://{host}:{port}");

    HttpServer::new(move || {
        App::new().app_data(state.clone()).wrap(Logger::default()).configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
