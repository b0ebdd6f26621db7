pub mod test_with_server;

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use fake::{faker, Fake};
use league_ops_server::{
    entities::{
        event::{CreateEvent, Event},
        school::{CreateSchool, School},
        user::{CreateUser, LocalUser},
    },
    interfaces::repositories::{
        event::EventRepositoryInterface, school::SchoolRepositoryInterface,
        user::UserRepositoryInterface,
    },
    middleware::mw_ctx::CtxState,
};
use serde_json::json;

pub const PASSWORD: &str = "some3242paSs#$";

/// Unique username with the given prefix, so parallel fakes never collide.
#[allow(dead_code)]
pub fn fake_username(prefix: &str) -> String {
    let word: String = faker::internet::en::Username().fake();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}_{}", word.to_lowercase(), &suffix[..6])
}

#[allow(dead_code)]
pub async fn create_user(
    ctx_state: &CtxState,
    role: &str,
    setup: impl FnOnce(CreateUser) -> CreateUser,
) -> LocalUser {
    let data = setup(CreateUser::new(&fake_username(role), PASSWORD, role));
    ctx_state.db.users.create(data).await.unwrap()
}

#[allow(dead_code)]
pub async fn create_school(ctx_state: &CtxState, id: &str, league_id: Option<&str>) -> School {
    ctx_state
        .db
        .schools
        .create(CreateSchool {
            id: Some(id.to_string()),
            name: format!("{id} school"),
            league_id: league_id.map(|v| v.to_string()),
        })
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn new_event(
    title: &str,
    league: Option<&str>,
    school: Option<&str>,
    team: Option<&str>,
) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        starts_at: Utc.with_ymd_and_hms(2026, 9, 1, 18, 0, 0).unwrap(),
        league_id: league.map(|v| v.to_string()),
        school_id: school.map(|v| v.to_string()),
        team_id: team.map(|v| v.to_string()),
    }
}

#[allow(dead_code)]
pub async fn create_event(
    ctx_state: &CtxState,
    title: &str,
    league: Option<&str>,
    school: Option<&str>,
    team: Option<&str>,
) -> Event {
    ctx_state
        .db
        .events
        .create(new_event(title, league, school, team))
        .await
        .unwrap()
}

/// Logs in through the API; the server keeps the session cookie afterwards.
#[allow(dead_code)]
pub async fn login(server: &TestServer, user: &LocalUser) {
    let response = server
        .post("/api/login")
        .json(&json!({ "username": user.username, "password": PASSWORD }))
        .await;
    response.assert_status_success();
}

#[allow(dead_code)]
pub fn titles(events: &[Event]) -> Vec<String> {
    let mut titles = events.iter().map(|e| e.title.clone()).collect::<Vec<_>>();
    titles.sort();
    titles
}
