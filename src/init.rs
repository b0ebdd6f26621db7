use crate::{
    entities::{school::CreateSchool, user::CreateUser},
    interfaces::repositories::{school::SchoolRepositoryInterface, user::UserRepositoryInterface},
    middleware::{error::AppResult, mw_ctx::CtxState},
    routes::{auth, events, schools},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const DEV_LEAGUE_ID: &str = "metro-league";

/// Seeds two schools and one user per working role. Existing usernames are
/// left untouched so restarts are harmless.
pub async fn create_default_data_for_dev(ctx_state: &CtxState, password: &str) -> AppResult<()> {
    let db = &ctx_state.db;

    for (id, name) in [("north-high", "North High"), ("south-high", "South High")] {
        if db.schools.get_by_id(id).await?.is_none() {
            db.schools
                .create(CreateSchool {
                    id: Some(id.to_string()),
                    name: name.to_string(),
                    league_id: Some(DEV_LEAGUE_ID.to_string()),
                })
                .await?;
        }
    }

    let users = [
        CreateUser {
            league_ids: Some(vec![DEV_LEAGUE_ID.to_string()]),
            ..CreateUser::new("league-admin", password, "league_admin")
        },
        CreateUser {
            school_id: Some("north-high".to_string()),
            ..CreateUser::new("north-ad", password, "athletic_director")
        },
        CreateUser {
            school_id: Some("north-high".to_string()),
            team_ids: Some(vec!["north-varsity".to_string()]),
            ..CreateUser::new("north-coach", password, "coach")
        },
        CreateUser {
            league_ids: Some(vec![DEV_LEAGUE_ID.to_string()]),
            ..CreateUser::new("metro-official", password, "official")
        },
    ];

    for user in users {
        if db.users.get_by_username(&user.username).await?.is_none() {
            let created = db.users.create(user).await?;
            info!("->> dev user created {} ({})", created.username, created.role);
        }
    }
    Ok(())
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .merge(auth::routes())
        .merge(events::routes())
        .merge(schools::routes())
        .with_state(ctx_state.clone())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
