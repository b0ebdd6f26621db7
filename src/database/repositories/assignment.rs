use crate::access::query::ScopeColumns;
use crate::database::client::Db;
use crate::database::query_builder::SurrealQueryBuilder;
use crate::entities::assignment::{AssignOfficialInput, OfficialAssignment, TABLE_NAME};
use crate::entities::event::Event;
use crate::interfaces::repositories::assignment::AssignmentRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{new_record_key, ViewFieldSelector};
use async_trait::async_trait;
use std::sync::Arc;

pub const ASSIGNMENT_SCOPE_COLUMNS: ScopeColumns = ScopeColumns {
    league: Some("league_id"),
    school: Some("school_id"),
    team: None,
    official: None,
};

/// Officials only ever see their own assignments.
pub const OFFICIAL_ASSIGNMENT_SCOPE_COLUMNS: ScopeColumns = ScopeColumns {
    official: Some("official_id"),
    ..ASSIGNMENT_SCOPE_COLUMNS
};

#[derive(Debug)]
pub struct AssignmentRepository {
    client: Arc<Db>,
}

impl AssignmentRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS event_id ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS official_id ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS position ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS league_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS school_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS assignment_event_official_idx ON TABLE {TABLE_NAME} COLUMNS event_id, official_id UNIQUE;
    DEFINE INDEX IF NOT EXISTS assignment_official_idx ON TABLE {TABLE_NAME} COLUMNS official_id;
    ");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl AssignmentRepositoryInterface for AssignmentRepository {
    async fn create(
        &self,
        event: &Event,
        data: AssignOfficialInput,
    ) -> AppResult<OfficialAssignment> {
        let id = new_record_key();
        let fields = OfficialAssignment::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "CREATE type::thing('{TABLE_NAME}', $id) SET event_id=$event_id, official_id=$official_id,
                    position=$position, league_id=$league_id, school_id=$school_id;"
            ))
            .query(format!("SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"))
            .bind(("id", id.clone()))
            .bind(("event_id", event.id.clone()))
            .bind(("official_id", data.official_id))
            .bind(("position", data.position))
            .bind(("league_id", event.league_id.clone()))
            .bind(("school_id", event.school_id.clone()))
            .await?
            .check()?;
        let assignment: Option<OfficialAssignment> = res.take(1)?;
        assignment.ok_or(AppError::EntityFailIdNotFound { ident: id })
    }

    async fn list(&self, query: SurrealQueryBuilder) -> AppResult<Vec<OfficialAssignment>> {
        let mut res = query.into_db_query(&self.client).await?;
        Ok(res.take(0)?)
    }

    fn select_query(&self) -> SurrealQueryBuilder {
        SurrealQueryBuilder::new(format!(
            "SELECT {} FROM {TABLE_NAME}",
            OfficialAssignment::get_select_query_fields()
        ))
        .tail("ORDER BY event_id ASC")
    }
}
