use crate::database::query_builder::SurrealQueryBuilder;
use crate::entities::event::{CreateEvent, Event};
use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepositoryInterface {
    async fn create(&self, data: CreateEvent) -> AppResult<Event>;
    async fn get_by_id(&self, event_id: &str) -> AppResult<Option<Event>>;
    /// Runs a query built on top of [`EventRepositoryInterface::select_query`].
    async fn list(&self, query: SurrealQueryBuilder) -> AppResult<Vec<Event>>;
    fn select_query(&self) -> SurrealQueryBuilder;
}
