//! # forum-api
//!
//! The web routing and orchestration layer for the forum API. Parses
//! requests, resolves the caller's identity from a Bearer token, merges
//! route parameters and body fields into use-case payloads, and shapes
//! every response as `{status, data?}` / `{status, message}`.

pub mod auth;
pub mod error;
pub mod handlers;

use actix_web::web;

/// Configures the forum routes.
///
/// Scoped configuration so the binary can mount the API under a prefix
/// if it ever needs to.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users").route(web::post().to(handlers::post_user)))
        .service(
            web::resource("/authentications")
                .route(web::post().to(handlers::post_authentication))
                .route(web::put().to(handlers::put_authentication))
                .route(web::delete().to(handlers::delete_authentication)),
        )
        .service(web::resource("/threads").route(web::post().to(handlers::post_thread)))
        .service(
            web::resource("/threads/{thread_id}").route(web::get().to(handlers::get_thread)),
        )
        .service(
            web::resource("/threads/{thread_id}/comments")
                .route(web::post().to(handlers::post_comment)),
        )
        .service(
            web::resource("/threads/{thread_id}/comments/{comment_id}")
                .route(web::delete().to(handlers::delete_comment)),
        )
        .service(
            web::resource("/threads/{thread_id}/comments/{comment_id}/replies")
                .route(web::post().to(handlers::post_reply)),
        )
        .service(
            web::resource("/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}")
                .route(web::delete().to(handlers::delete_reply)),
        );
}
