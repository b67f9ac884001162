//! Request handlers. Each one merges route parameters, body fields, and
//! the authenticated caller id into a use-case payload, runs the use
//! case, and shapes the `{status, data}` envelope; everything else is
//! the use case's business.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use forum_core::traits::AuthTokenManager;
use forum_core::usecase::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentPayload,
    DeleteCommentUseCase, DeleteReplyPayload, DeleteReplyUseCase, GetDetailThreadUseCase,
    LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;

/// State shared across all actix workers: one instance of every use
/// case, plus the token manager for the Bearer extractor.
pub struct AppState {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
    pub add_thread: AddThreadUseCase,
    pub get_detail_thread: GetDetailThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub token_manager: Arc<dyn AuthTokenManager>,
}

type ApiResult = Result<HttpResponse, ApiError>;

fn created(data: Value) -> HttpResponse {
    HttpResponse::Created().json(json!({ "status": "success", "data": data }))
}

fn success(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "success", "data": data }))
}

fn success_empty() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "success" }))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|err| ApiError(forum_core::error::AppError::Internal(err.to_string())))
}

/// Takes the raw body (an absent or non-object body becomes `{}` so
/// entity validation reports the missing fields) and merges extra keys
/// into it. Extras always win over body keys.
fn merge_payload(body: Option<web::Json<Value>>, extra: &[(&str, &str)]) -> Value {
    let mut payload = match body.map(web::Json::into_inner) {
        Some(value @ Value::Object(_)) => value,
        _ => json!({}),
    };
    if let Value::Object(map) = &mut payload {
        for (key, value) in extra {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }
    }
    payload
}

pub async fn post_user(state: web::Data<AppState>, body: Option<web::Json<Value>>) -> ApiResult {
    let payload = merge_payload(body, &[]);
    let added_user = state.add_user.execute(&payload).await?;
    Ok(created(json!({ "addedUser": to_value(&added_user)? })))
}

pub async fn post_authentication(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let payload = merge_payload(body, &[]);
    let new_auth = state.login_user.execute(&payload).await?;
    Ok(created(to_value(&new_auth)?))
}

pub async fn put_authentication(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let payload = merge_payload(body, &[]);
    let access_token = state.refresh_authentication.execute(&payload).await?;
    Ok(success(json!({ "accessToken": access_token })))
}

pub async fn delete_authentication(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let payload = merge_payload(body, &[]);
    state.logout_user.execute(&payload).await?;
    Ok(success_empty())
}

pub async fn post_thread(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let payload = merge_payload(body, &[("owner", &user.id)]);
    let added_thread = state.add_thread.execute(&payload).await?;
    Ok(created(json!({ "addedThread": to_value(&added_thread)? })))
}

pub async fn get_thread(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let thread_id = path.into_inner();
    let thread_detail = state.get_detail_thread.execute(&thread_id).await?;
    Ok(success(json!({ "thread": to_value(&thread_detail)? })))
}

pub async fn post_comment(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let thread_id = path.into_inner();
    let payload = merge_payload(body, &[("threadId", &thread_id), ("owner", &user.id)]);
    let added_comment = state.add_comment.execute(&payload).await?;
    Ok(created(json!({ "addedComment": to_value(&added_comment)? })))
}

pub async fn delete_comment(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> ApiResult {
    let (thread_id, comment_id) = path.into_inner();
    state
        .delete_comment
        .execute(DeleteCommentPayload { thread_id, comment_id, owner: user.id })
        .await?;
    Ok(success_empty())
}

pub async fn post_reply(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    body: Option<web::Json<Value>>,
) -> ApiResult {
    let (_thread_id, comment_id) = path.into_inner();
    let payload = merge_payload(body, &[("commentId", &comment_id), ("owner", &user.id)]);
    let added_reply = state.add_reply.execute(&payload).await?;
    Ok(created(json!({ "addedReply": to_value(&added_reply)? })))
}

pub async fn delete_reply(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, String, String)>,
) -> ApiResult {
    let (_thread_id, comment_id, reply_id) = path.into_inner();
    state
        .delete_reply
        .execute(DeleteReplyPayload { comment_id, reply_id, owner: user.id })
        .await?;
    Ok(success_empty())
}
