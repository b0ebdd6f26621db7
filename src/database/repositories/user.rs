use crate::access::base::role::Role;
use crate::database::client::Db;
use crate::entities::user::{CreateUser, LocalUser, TABLE_NAME};
use crate::interfaces::repositories::user::UserRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{new_record_key, ViewFieldSelector};
use crate::utils::hash::hash_password;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug)]
pub struct UserRepository {
    client: Arc<Db>,
}

impl UserRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS username ON TABLE {TABLE_NAME} TYPE string VALUE string::lowercase($value);
    DEFINE FIELD IF NOT EXISTS password_hash ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS role ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS school_id ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS league_ids ON TABLE {TABLE_NAME} TYPE option<array<string>>;
    DEFINE FIELD IF NOT EXISTS school_ids ON TABLE {TABLE_NAME} TYPE option<array<string>>;
    DEFINE FIELD IF NOT EXISTS team_ids ON TABLE {TABLE_NAME} TYPE option<array<string>>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS local_user_username_idx ON TABLE {TABLE_NAME} COLUMNS username UNIQUE;
    ");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create(&self, data: CreateUser) -> AppResult<LocalUser> {
        let (_, password_hash) = hash_password(&data.password)
            .map_err(|description| AppError::Generic { description })?;
        let id = new_record_key();
        let fields = LocalUser::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "CREATE type::thing('{TABLE_NAME}', $id) SET username=$username, password_hash=$password_hash,
                    role=$role, school_id=$school_id, league_ids=$league_ids, school_ids=$school_ids, team_ids=$team_ids;"
            ))
            .query(format!("SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"))
            .bind(("id", id.clone()))
            .bind(("username", data.username))
            .bind(("password_hash", password_hash))
            .bind(("role", Role::normalize(&data.role)))
            .bind(("school_id", data.school_id))
            .bind(("league_ids", data.league_ids))
            .bind(("school_ids", data.school_ids))
            .bind(("team_ids", data.team_ids))
            .await?
            .check()?;
        let user: Option<LocalUser> = res.take(1)?;
        user.ok_or(AppError::EntityFailIdNotFound { ident: id })
    }

    async fn get_by_id(&self, user_id: &str) -> AppResult<Option<LocalUser>> {
        let fields = LocalUser::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "SELECT {fields} FROM ONLY type::thing('{TABLE_NAME}', $id);"
            ))
            .bind(("id", user_id.to_string()))
            .await?;
        Ok(res.take(0)?)
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<LocalUser>> {
        let fields = LocalUser::get_select_query_fields();
        let mut res = self
            .client
            .query(format!(
                "SELECT {fields} FROM {TABLE_NAME} WHERE username = string::lowercase($username) LIMIT 1;"
            ))
            .bind(("username", username.to_string()))
            .await?;
        let users: Vec<LocalUser> = res.take(0)?;
        Ok(users.into_iter().next())
    }

    async fn get_password_hash(&self, user_id: &str) -> AppResult<Option<String>> {
        let mut res = self
            .client
            .query(format!(
                "SELECT VALUE password_hash FROM ONLY type::thing('{TABLE_NAME}', $id);"
            ))
            .bind(("id", user_id.to_string()))
            .await?;
        Ok(res.take(0)?)
    }
}
