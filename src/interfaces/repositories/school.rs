use crate::entities::school::{CreateSchool, School};
use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait SchoolRepositoryInterface {
    async fn create(&self, data: CreateSchool) -> AppResult<School>;
    async fn get_by_id(&self, school_id: &str) -> AppResult<Option<School>>;
    async fn list(&self) -> AppResult<Vec<School>>;
}
