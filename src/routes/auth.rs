use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use crate::{
    middleware::{
        ctx::Ctx,
        error::CtxResult,
        mw_ctx::CtxState,
        utils::cookie_utils::{issue_login_jwt, remove_login_jwt},
    },
    services::{
        auth_service::{AuthService, LoginInput},
        scope_service::{ScopeService, SessionScope},
    },
};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", get(logout))
        .route("/api/users/current", get(get_current_user))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginView {
    pub id: String,
    pub username: String,
    pub role: String,
    pub token: String,
}

async fn login(
    State(state): State<Arc<CtxState>>,
    cookies: Cookies,
    Json(input): Json<LoginInput>,
) -> CtxResult<Json<LoginView>> {
    let (user, token) = AuthService::new(&state.db.users, &state.jwt)
        .login(input)
        .await?;
    issue_login_jwt(&cookies, token.clone());
    Ok(Json(LoginView {
        id: user.id,
        username: user.username,
        role: user.role,
        token,
    }))
}

async fn logout(cookies: Cookies) -> Response {
    remove_login_jwt(&cookies);
    StatusCode::OK.into_response()
}

async fn get_current_user(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<SessionScope>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    Ok(Json(session))
}
