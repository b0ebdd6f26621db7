use tracing::info;
use validator::Validate;

use crate::{
    entities::user::LocalUser,
    interfaces::repositories::user::UserRepositoryInterface,
    middleware::error::{AppError, AppResult},
    utils::{hash::verify_password, jwt::JWT},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub struct AuthService<'a, U>
where
    U: UserRepositoryInterface,
{
    users_repository: &'a U,
    jwt: &'a JWT,
}

impl<'a, U> AuthService<'a, U>
where
    U: UserRepositoryInterface,
{
    pub fn new(users_repository: &'a U, jwt: &'a JWT) -> Self {
        Self {
            users_repository,
            jwt,
        }
    }

    /// Returns the user and a fresh login token.
    pub async fn login(&self, input: LoginInput) -> AppResult<(LocalUser, String)> {
        input.validate()?;

        let user = self
            .users_repository
            .get_by_username(&input.username)
            .await?
            .ok_or(AppError::AuthenticationFail)?;

        let hash = self
            .users_repository
            .get_password_hash(&user.id)
            .await?
            .ok_or(AppError::AuthenticationFail)?;

        if !verify_password(&hash, &input.password) {
            return Err(AppError::AuthenticationFail);
        }

        let token = self.jwt.create_by_login(&user.id)?;
        info!("->> login user={} role={}", user.id, user.role);
        Ok((user, token))
    }
}
