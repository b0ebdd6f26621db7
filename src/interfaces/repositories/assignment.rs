use crate::database::query_builder::SurrealQueryBuilder;
use crate::entities::assignment::{AssignOfficialInput, OfficialAssignment};
use crate::entities::event::Event;
use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait AssignmentRepositoryInterface {
    async fn create(&self, event: &Event, data: AssignOfficialInput)
        -> AppResult<OfficialAssignment>;
    async fn list(&self, query: SurrealQueryBuilder) -> AppResult<Vec<OfficialAssignment>>;
    fn select_query(&self) -> SurrealQueryBuilder;
}
