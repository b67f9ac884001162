//! User registration.

use std::sync::Arc;

use serde_json::Value;

use crate::entities::{RegisterUser, RegisteredUser};
use crate::error::Result;
use crate::traits::{PasswordHasher, UserRepository};

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { user_repository, password_hasher }
    }

    pub async fn execute(&self, payload: &Value) -> Result<RegisteredUser> {
        let register_user = RegisterUser::from_payload(payload)?;
        self.user_repository.verify_available_username(&register_user.username).await?;

        let password_hash = self.password_hasher.hash(&register_user.password)?;
        self.user_repository.add_user(register_user, &password_hash).await
    }
}
