//! Maps `AppError` onto HTTP responses and rewrites domain signal codes
//! into their user-facing messages.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use forum_core::error::AppError;
use serde_json::json;

/// Rewrites a domain signal code to its user-facing message. Messages
/// without a translation pass through unchanged.
pub fn translate(message: &str) -> &str {
    match message {
        "REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
        }
        "REGISTER_USER.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat user baru karena tipe data tidak sesuai"
        }
        "REGISTER_USER.USERNAME_LIMIT_CHAR" => {
            "tidak dapat membuat user baru karena karakter username melebihi batas limit"
        }
        "REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER" => {
            "tidak dapat membuat user baru karena username mengandung karakter terlarang"
        }
        "USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY" => "harus mengirimkan username dan password",
        "USER_LOGIN.NOT_MEET_DATA_TYPE_SPECIFICATION" => "username dan password harus string",
        "REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN"
        | "DELETE_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN" => {
            "harus mengirimkan token refresh"
        }
        "REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
        | "DELETE_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "refresh token harus string"
        }
        "NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "gagal membuat thread karena properti yang dibutuhkan tidak ada"
        }
        "NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "gagal membuat thread karena tipe data tidak sesuai"
        }
        "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "gagal membuat comment karena properti yang dibutuhkan tidak ada"
        }
        "NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "gagal membuat comment karena tipe data tidak sesuai"
        }
        "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND" => "thread tidak ditemukan",
        "NEW_REPLY.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "gagal membuat balasan karena properti yang dibutuhkan tidak ada"
        }
        "NEW_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "gagal membuat balasan karena tipe data tidak sesuai"
        }
        other => other,
    }
}

/// `AppError` wrapped for actix; carries the status mapping and the
/// response body shape.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::Entity(_) | AppError::Invariant(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(cause) = &self.0 {
            // Details stay server-side.
            log::error!("internal error: {cause}");
            return HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "terjadi kegagalan pada server kami",
            }));
        }

        let message = self.0.to_string();
        HttpResponse::build(self.status_code()).json(json!({
            "status": "fail",
            "message": translate(&message),
        }))
    }
}
