//! End-to-end route tests against in-memory adapters. The token manager
//! and password hasher are the real implementations; only persistence is
//! stubbed.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use forum_api::configure_routes;
use forum_api::handlers::AppState;
use forum_auth_jwt::{Argon2PasswordHasher, JwtTokenManager};
use forum_core::entities::{
    AddedComment, AddedReply, AddedThread, DetailComment, DetailReply, DetailThread, NewComment,
    NewReply, NewThread, RegisterUser, RegisteredUser,
};
use forum_core::error::{AppError, Result};
use forum_core::traits::{
    AuthTokenManager, AuthenticationRepository, CommentRepository, PasswordHasher, ReplyRepository,
    ThreadRepository, TokenPayload, UserRepository,
};
use forum_core::usecase::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetDetailThreadUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshAuthenticationUseCase,
};
use serde_json::{json, Value};

const THREAD_ID: &str = "thread-123";
const COMMENT_ID: &str = "comment-123";
const OWNER_ID: &str = "user-123";

struct StubThreadRepository;

#[async_trait]
impl ThreadRepository for StubThreadRepository {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread> {
        Ok(AddedThread {
            id: THREAD_ID.to_string(),
            title: new_thread.title,
            owner: new_thread.owner,
        })
    }

    async fn get_detail_thread_by_id(&self, thread_id: &str) -> Result<DetailThread> {
        if thread_id != THREAD_ID {
            return Err(AppError::NotFound("thread tidak ditemukan".to_string()));
        }
        Ok(DetailThread {
            id: THREAD_ID.to_string(),
            title: "sebuah thread".to_string(),
            body: "sebuah body thread".to_string(),
            date: "2021-08-08T07:19:09.775Z".to_string(),
            username: "dicoding".to_string(),
        })
    }

    async fn verify_thread_existence(&self, thread_id: &str) -> Result<()> {
        if thread_id != THREAD_ID {
            return Err(AppError::NotFound("thread tidak ditemukan".to_string()));
        }
        Ok(())
    }
}

struct StubCommentRepository;

#[async_trait]
impl CommentRepository for StubCommentRepository {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment> {
        Ok(AddedComment {
            id: COMMENT_ID.to_string(),
            content: new_comment.content,
            owner: new_comment.owner,
        })
    }

    async fn delete_comment_by_id(&self, _comment_id: &str) -> Result<()> {
        Ok(())
    }

    async fn get_comment_by_thread_id(&self, _thread_id: &str) -> Result<Vec<DetailComment>> {
        Ok(vec![
            DetailComment {
                id: COMMENT_ID.to_string(),
                username: "johndoe".to_string(),
                date: "2021-08-08T07:22:33.555Z".to_string(),
                content: "sebuah comment".to_string(),
                is_delete: false,
            },
            DetailComment {
                id: "comment-456".to_string(),
                username: "dicoding".to_string(),
                date: "2021-08-08T07:26:21.338Z".to_string(),
                content: "komentar rahasia".to_string(),
                is_delete: true,
            },
        ])
    }

    async fn verify_comment_existence(&self, comment_id: &str) -> Result<()> {
        if comment_id != COMMENT_ID {
            return Err(AppError::NotFound("Komentar tidak ditemukan".to_string()));
        }
        Ok(())
    }

    async fn verify_comment_existence_in_thread(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<()> {
        if comment_id != COMMENT_ID || thread_id != THREAD_ID {
            return Err(AppError::NotFound("Komentar tidak ditemukan".to_string()));
        }
        Ok(())
    }

    async fn verify_comment_owner(&self, _comment_id: &str, owner: &str) -> Result<()> {
        if owner != OWNER_ID {
            return Err(AppError::Forbidden("AuthorizationError".to_string()));
        }
        Ok(())
    }
}

struct StubReplyRepository;

#[async_trait]
impl ReplyRepository for StubReplyRepository {
    async fn add_reply(&self, new_reply: NewReply) -> Result<AddedReply> {
        Ok(AddedReply {
            id: "reply-123".to_string(),
            content: new_reply.content,
            owner: new_reply.owner,
        })
    }

    async fn delete_reply_by_id(&self, _reply_id: &str) -> Result<()> {
        Ok(())
    }

    async fn get_reply_by_comment_id(&self, _comment_id: &str) -> Result<Vec<DetailReply>> {
        Ok(vec![])
    }

    async fn verify_reply_existence_in_comment(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> Result<()> {
        if reply_id != "reply-123" || comment_id != COMMENT_ID {
            return Err(AppError::NotFound("Balasan tidak ditemukan".to_string()));
        }
        Ok(())
    }

    async fn verify_reply_owner(&self, _reply_id: &str, owner: &str) -> Result<()> {
        if owner != OWNER_ID {
            return Err(AppError::Forbidden("AuthorizationError".to_string()));
        }
        Ok(())
    }
}

/// Knows exactly one registered user, `dicoding`, whose password hash is
/// computed once at construction.
struct StubUserRepository {
    password_hash: String,
}

impl StubUserRepository {
    fn new(hasher: &Argon2PasswordHasher) -> Self {
        Self { password_hash: hasher.hash("secret").unwrap() }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn add_user(
        &self,
        register_user: RegisterUser,
        _password_hash: &str,
    ) -> Result<RegisteredUser> {
        Ok(RegisteredUser {
            id: OWNER_ID.to_string(),
            username: register_user.username,
            fullname: register_user.fullname,
        })
    }

    async fn verify_available_username(&self, username: &str) -> Result<()> {
        if username == "dicoding" {
            return Err(AppError::Invariant("username tidak tersedia".to_string()));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        if username != "dicoding" {
            return Err(AppError::Invariant("username tidak ditemukan".to_string()));
        }
        Ok(self.password_hash.clone())
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        if username != "dicoding" {
            return Err(AppError::Invariant("username tidak ditemukan".to_string()));
        }
        Ok(OWNER_ID.to_string())
    }
}

struct StubAuthenticationRepository;

#[async_trait]
impl AuthenticationRepository for StubAuthenticationRepository {
    async fn add_token(&self, _token: &str) -> Result<()> {
        Ok(())
    }

    async fn check_token_availability(&self, _token: &str) -> Result<()> {
        Ok(())
    }

    async fn delete_token(&self, _token: &str) -> Result<()> {
        Ok(())
    }
}

fn test_state() -> web::Data<AppState> {
    let thread_repository: Arc<dyn ThreadRepository> = Arc::new(StubThreadRepository);
    let comment_repository: Arc<dyn CommentRepository> = Arc::new(StubCommentRepository);
    let reply_repository: Arc<dyn ReplyRepository> = Arc::new(StubReplyRepository);
    let hasher = Argon2PasswordHasher;
    let user_repository: Arc<dyn UserRepository> = Arc::new(StubUserRepository::new(&hasher));
    let authentication_repository: Arc<dyn AuthenticationRepository> =
        Arc::new(StubAuthenticationRepository);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(hasher);
    let token_manager: Arc<dyn AuthTokenManager> =
        Arc::new(JwtTokenManager::new("test_access_key", "test_refresh_key", 3000));

    web::Data::new(AppState {
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
    })
}

fn bearer_for(state: &web::Data<AppState>, id: &str, username: &str) -> (&'static str, String) {
    let token = state
        .token_manager
        .create_access_token(&TokenPayload { id: id.to_string(), username: username.to_string() })
        .unwrap();
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(configure_routes)).await
    };
}

#[actix_web::test]
async fn post_thread_without_a_token_is_rejected() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/threads")
        .set_json(json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "fail", "message": "Missing authentication" }));
}

#[actix_web::test]
async fn post_thread_with_an_invalid_token_is_rejected_like_a_missing_one() {
    let state = test_state();
    let app = test_app!(state);
    let other_manager = JwtTokenManager::new("some_other_key", "some_other_refresh_key", 3000);
    let token = other_manager
        .create_access_token(&TokenPayload {
            id: OWNER_ID.to_string(),
            username: "dicoding".to_string(),
        })
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/threads")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "fail", "message": "Missing authentication" }));
}

#[actix_web::test]
async fn post_thread_creates_a_thread_owned_by_the_caller() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, OWNER_ID, "dicoding");

    let req = test::TestRequest::post()
        .uri("/threads")
        .insert_header((name, value))
        .set_json(json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["data"]["addedThread"],
        json!({ "id": "thread-123", "title": "sebuah thread", "owner": "user-123" })
    );
}

#[actix_web::test]
async fn post_thread_with_an_incomplete_body_reports_the_missing_property() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, OWNER_ID, "dicoding");

    let req = test::TestRequest::post()
        .uri("/threads")
        .insert_header((name, value))
        .set_json(json!({ "title": "sebuah thread" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "status": "fail",
            "message": "gagal membuat thread karena properti yang dibutuhkan tidak ada"
        })
    );
}

#[actix_web::test]
async fn get_thread_redacts_deleted_comments_and_hides_the_delete_flag() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/threads/thread-123").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let comments = body["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "sebuah comment");
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
    assert!(comments[1].get("is_delete").is_none());
    assert!(comments[1].get("isDelete").is_none());
}

#[actix_web::test]
async fn get_thread_for_an_unknown_id_is_not_found() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/threads/thread-999").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "fail", "message": "thread tidak ditemukan" }));
}

#[actix_web::test]
async fn post_comment_on_a_missing_thread_is_not_found() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, OWNER_ID, "dicoding");

    let req = test::TestRequest::post()
        .uri("/threads/thread-999/comments")
        .insert_header((name, value))
        .set_json(json!({ "content": "sebuah comment" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "fail", "message": "thread tidak ditemukan" }));
}

#[actix_web::test]
async fn delete_comment_by_a_non_owner_is_forbidden() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, "user-999", "johndoe");

    let req = test::TestRequest::delete()
        .uri("/threads/thread-123/comments/comment-123")
        .insert_header((name, value))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "fail", "message": "AuthorizationError" }));
}

#[actix_web::test]
async fn delete_comment_by_its_owner_succeeds() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, OWNER_ID, "dicoding");

    let req = test::TestRequest::delete()
        .uri("/threads/thread-123/comments/comment-123")
        .insert_header((name, value))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "success" }));
}

#[actix_web::test]
async fn post_reply_creates_a_reply_under_the_comment() {
    let state = test_state();
    let app = test_app!(state);
    let (name, value) = bearer_for(&state, OWNER_ID, "dicoding");

    let req = test::TestRequest::post()
        .uri("/threads/thread-123/comments/comment-123/replies")
        .insert_header((name, value))
        .set_json(json!({ "content": "sebuah balasan" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["data"]["addedReply"],
        json!({ "id": "reply-123", "content": "sebuah balasan", "owner": "user-123" })
    );
}

#[actix_web::test]
async fn post_user_registers_and_returns_the_new_user() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": "johndoe",
            "password": "secret",
            "fullname": "John Doe"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["addedUser"]["username"], "johndoe");
}

#[actix_web::test]
async fn login_returns_both_tokens_and_refresh_trades_them_for_a_new_access_token() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/authentications")
        .set_json(json!({ "username": "dicoding", "password": "secret" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let refresh_token = body["data"]["refreshToken"].as_str().unwrap().to_string();
    assert!(body["data"]["accessToken"].as_str().is_some());

    let req = test::TestRequest::put()
        .uri("/authentications")
        .set_json(json!({ "refreshToken": refresh_token }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert!(body["data"]["accessToken"].as_str().is_some());
}

#[actix_web::test]
async fn login_with_a_wrong_password_is_unauthorized() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/authentications")
        .set_json(json!({ "username": "dicoding", "password": "wrong" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "kredensial yang Anda masukkan salah" })
    );
}
