use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

use crate::database::repositories::{
    assignment::AssignmentRepository, event::EventRepository, school::SchoolRepository,
    user::UserRepository,
};
use crate::middleware::error::AppResult;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

#[derive(Debug)]
pub struct Database {
    pub client: Arc<Db>,
    pub users: UserRepository,
    pub schools: SchoolRepository,
    pub events: EventRepository,
    pub assignments: AssignmentRepository,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> AppResult<Self> {
        info!(
            "->> connecting DB url={} ns={} db={}",
            config.url, config.namespace, config.database
        );
        let conn = connect(config.url).await?;

        if let (Some(password), Some(username)) = (config.password, config.username) {
            conn.signin(Root { username, password }).await?;
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await?;

        let version = conn.version().await?;
        info!("->> connected DB version: {version}");

        let client = Arc::new(conn);
        Ok(Self {
            users: UserRepository::new(client.clone()),
            schools: SchoolRepository::new(client.clone()),
            events: EventRepository::new(client.clone()),
            assignments: AssignmentRepository::new(client.clone()),
            client,
        })
    }

    pub async fn run_migrations(&self) -> AppResult<()> {
        self.users.mutate_db().await?;
        self.schools.mutate_db().await?;
        self.events.mutate_db().await?;
        self.assignments.mutate_db().await?;
        info!("->> migrations done");
        Ok(())
    }
}
