use crate::database::client::Db;
use crate::entities::school::{CreateSchool, School, TABLE_NAME};
use crate::interfaces::repositories::school::SchoolRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{new_record_key, ViewFieldSelector};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug)]
pub struct SchoolRepository {
    client: Arc<Db>,
}

impl SchoolRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS league_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE INDEX IF NOT EXISTS school_league_idx ON TABLE {TABLE_NAME} COLUMNS league_id;
    ");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl SchoolRepositoryInterface for SchoolRepository {
    async fn create(&self, data: CreateSchool) -> AppResult<School> {
        let id = data.id.unwrap_or_else(new_record_key);
        let fields = School::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "CREATE type::thing('{TABLE_NAME}', $id) SET name=$name, league_id=$league_id;"
            ))
            .query(format!("SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"))
            .bind(("id", id.clone()))
            .bind(("name", data.name))
            .bind(("league_id", data.league_id))
            .await?
            .check()?;
        let school: Option<School> = res.take(1)?;
        school.ok_or(AppError::EntityFailIdNotFound { ident: id })
    }

    async fn get_by_id(&self, school_id: &str) -> AppResult<Option<School>> {
        let fields = School::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"
            ))
            .bind(("id", school_id.to_string()))
            .await?;
        Ok(res.take(0)?)
    }

    async fn list(&self) -> AppResult<Vec<School>> {
        let fields = School::get_select_query_fields();
        let mut res = self
            .client
            .query(format!("SELECT {fields} FROM {TABLE_NAME} ORDER BY name ASC;"))
            .await?;
        Ok(res.take(0)?)
    }
}
