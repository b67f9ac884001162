//! Authentication use cases: login, access-token refresh, logout.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{NewAuth, UserLogin};
use crate::error::{AppError, Result};
use crate::traits::{AuthTokenManager, AuthenticationRepository, PasswordHasher, TokenPayload, UserRepository};

/// Pulls `refreshToken` out of a payload, tagging failures with the
/// given use-case prefix.
fn refresh_token_from_payload<'a>(payload: &'a Value, tag: &str) -> Result<&'a str> {
    match payload.get("refreshToken") {
        None | Some(Value::Null) => Err(AppError::Invariant(format!(
            "{tag}.NOT_CONTAIN_REFRESH_TOKEN"
        ))),
        Some(Value::String(token)) => Ok(token),
        Some(_) => Err(AppError::Invariant(format!(
            "{tag}.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
        ))),
    }
}

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthTokenManager>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthTokenManager>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hasher,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<NewAuth> {
        let user_login = UserLogin::from_payload(payload)?;

        let stored_password =
            self.user_repository.get_password_by_username(&user_login.username).await?;
        self.password_hasher.compare(&user_login.password, &stored_password)?;

        let id = self.user_repository.get_id_by_username(&user_login.username).await?;
        let token_payload = TokenPayload { id, username: user_login.username };

        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;
        self.authentication_repository.add_token(&refresh_token).await?;

        Ok(NewAuth { access_token, refresh_token })
    }
}

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthTokenManager>,
    ) -> Self {
        Self { authentication_repository, token_manager }
    }

    /// Returns a fresh access token for a refresh token that is valid
    /// and still registered.
    pub async fn execute(&self, payload: &Value) -> Result<String> {
        let refresh_token =
            refresh_token_from_payload(payload, "REFRESH_AUTHENTICATION_USE_CASE")?;

        self.token_manager.verify_refresh_token(refresh_token)?;
        self.authentication_repository.check_token_availability(refresh_token).await?;

        let token_payload = self.token_manager.decode_payload(refresh_token)?;
        self.token_manager.create_access_token(&token_payload)
    }
}

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self { authentication_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let refresh_token = refresh_token_from_payload(payload, "DELETE_AUTHENTICATION_USE_CASE")?;

        self.authentication_repository.check_token_availability(refresh_token).await?;
        self.authentication_repository.delete_token(refresh_token).await
    }
}
