use crate::access::query::ScopeColumns;
use crate::database::client::Db;
use crate::database::query_builder::SurrealQueryBuilder;
use crate::entities::event::{CreateEvent, Event, TABLE_NAME};
use crate::interfaces::repositories::event::EventRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{new_record_key, ViewFieldSelector};
use async_trait::async_trait;
use std::sync::Arc;

pub const EVENT_SCOPE_COLUMNS: ScopeColumns = ScopeColumns {
    league: Some("league_id"),
    school: Some("school_id"),
    team: Some("team_id"),
    official: None,
};

#[derive(Debug)]
pub struct EventRepository {
    client: Arc<Db>,
}

impl EventRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS starts_at ON TABLE {TABLE_NAME} TYPE datetime;
    DEFINE FIELD IF NOT EXISTS league_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS school_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS team_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS event_league_idx ON TABLE {TABLE_NAME} COLUMNS league_id;
    DEFINE INDEX IF NOT EXISTS event_school_idx ON TABLE {TABLE_NAME} COLUMNS school_id;
    DEFINE INDEX IF NOT EXISTS event_team_idx ON TABLE {TABLE_NAME} COLUMNS team_id;
    ");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl EventRepositoryInterface for EventRepository {
    async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        let id = new_record_key();
        let fields = Event::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "CREATE type::thing('{TABLE_NAME}', $id) SET title=$title, starts_at=type::datetime($starts_at),
                    league_id=$league_id, school_id=$school_id, team_id=$team_id;"
            ))
            .query(format!("SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"))
            .bind(("id", id.clone()))
            .bind(("title", data.title))
            .bind(("starts_at", data.starts_at.to_rfc3339()))
            .bind(("league_id", data.league_id))
            .bind(("school_id", data.school_id))
            .bind(("team_id", data.team_id))
            .await?
            .check()?;
        let event: Option<Event> = res.take(1)?;
        event.ok_or(AppError::EntityFailIdNotFound { ident: id })
    }

    async fn get_by_id(&self, event_id: &str) -> AppResult<Option<Event>> {
        let fields = Event::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"
            ))
            .bind(("id", event_id.to_string()))
            .await?;
        Ok(res.take(0)?)
    }

    async fn list(&self, query: SurrealQueryBuilder) -> AppResult<Vec<Event>> {
        let mut res = query.into_db_query(&self.client).await?;
        Ok(res.take(0)?)
    }

    fn select_query(&self) -> SurrealQueryBuilder {
        SurrealQueryBuilder::new(format!(
            "SELECT {} FROM {TABLE_NAME}",
            Event::get_select_query_fields()
        ))
        .tail("ORDER BY starts_at ASC")
    }
}
