//! # forum-auth-jwt
//!
//! Argon2 implementation of `PasswordHasher` and an HS256 JWT
//! implementation of `AuthTokenManager`. Access and refresh tokens are
//! signed with separate keys; only access tokens expire.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHasher as _};
use forum_core::error::{AppError, Result};
use forum_core::traits::{AuthTokenManager, PasswordHasher, TokenPayload};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| AppError::Internal(err.to_string()))
    }

    fn compare(&self, plain: &str, hashed: &str) -> Result<()> {
        let parsed = PasswordHash::new(hashed).map_err(|err| AppError::Internal(err.to_string()))?;
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .map_err(|_| {
                AppError::Unauthenticated("kredensial yang Anda masukkan salah".to_string())
            })
    }
}

#[derive(Serialize, Deserialize)]
struct Claims {
    id: String,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

pub struct JwtTokenManager {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_token_age_secs: i64,
}

impl JwtTokenManager {
    pub fn new(access_token_key: &str, refresh_token_key: &str, access_token_age_secs: i64) -> Self {
        Self {
            access_encoding_key: EncodingKey::from_secret(access_token_key.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(access_token_key.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(refresh_token_key.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_token_key.as_bytes()),
            access_token_age_secs,
        }
    }

    /// Refresh tokens carry no expiry; their lifetime is bounded by the
    /// authentications store instead.
    fn refresh_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl AuthTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String> {
        let claims = Claims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            exp: Some(chrono::Utc::now().timestamp() + self.access_token_age_secs),
        };
        encode(&Header::default(), &claims, &self.access_encoding_key)
            .map_err(|err| AppError::Internal(err.to_string()))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String> {
        let claims =
            Claims { id: payload.id.clone(), username: payload.username.clone(), exp: None };
        encode(&Header::default(), &claims, &self.refresh_encoding_key)
            .map_err(|err| AppError::Internal(err.to_string()))
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenPayload> {
        let data = decode::<Claims>(token, &self.access_decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthenticated("access token tidak valid".to_string()))?;

        Ok(TokenPayload { id: data.claims.id, username: data.claims.username })
    }

    fn verify_refresh_token(&self, token: &str) -> Result<()> {
        decode::<Claims>(token, &self.refresh_decoding_key, &Self::refresh_validation())
            .map(|_| ())
            .map_err(|_| AppError::Invariant("refresh token tidak valid".to_string()))
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload> {
        let data = decode::<Claims>(token, &self.refresh_decoding_key, &Self::refresh_validation())
            .map_err(|_| AppError::Invariant("refresh token tidak valid".to_string()))?;

        Ok(TokenPayload { id: data.claims.id, username: data.claims.username })
    }
}
