use crate::config::AppConfig;
use crate::database::client::Database;
use crate::utils::jwt::JWT;
use chrono::Duration;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub const JWT_KEY: &str = "jwt";

pub struct CtxState {
    pub db: Database,
    pub jwt: JWT,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtxState")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    Arc::new(CtxState {
        db,
        jwt: JWT::new(
            config.jwt_secret.clone(),
            Duration::hours(config.jwt_duration_hours),
        ),
    })
}
