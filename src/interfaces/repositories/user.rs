use crate::entities::user::{CreateUser, LocalUser};
use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepositoryInterface {
    async fn create(&self, data: CreateUser) -> AppResult<LocalUser>;
    async fn get_by_id(&self, user_id: &str) -> AppResult<Option<LocalUser>>;
    async fn get_by_username(&self, username: &str) -> AppResult<Option<LocalUser>>;
    async fn get_password_hash(&self, user_id: &str) -> AppResult<Option<String>>;
}
