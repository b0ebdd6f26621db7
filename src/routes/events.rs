use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    entities::{
        assignment::{AssignOfficialInput, OfficialAssignment},
        event::{CreateEvent, Event},
    },
    middleware::{ctx::Ctx, error::CtxResult, mw_ctx::CtxState},
    services::{event_service::EventService, scope_service::ScopeService},
};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/events", get(get_events).post(create_event))
        .route("/api/events/:event_id", get(get_event))
        .route("/api/events/:event_id/assignments", post(assign_official))
        .route("/api/assignments", get(get_assignments))
}

async fn get_events(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<Event>>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let events = EventService::new(&state.db.events, &state.db.assignments, &state.db.users)
        .list_events(&session.scope)
        .await?;
    Ok(Json(events))
}

async fn get_event(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(event_id): Path<String>,
) -> CtxResult<Json<Event>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let event = EventService::new(&state.db.events, &state.db.assignments, &state.db.users)
        .get_event(&session.scope, &event_id)
        .await?;
    Ok(Json(event))
}

async fn create_event(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Json(data): Json<CreateEvent>,
) -> CtxResult<Json<Event>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let event = EventService::new(&state.db.events, &state.db.assignments, &state.db.users)
        .create_event(&session.scope, data)
        .await?;
    Ok(Json(event))
}

async fn assign_official(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(event_id): Path<String>,
    Json(data): Json<AssignOfficialInput>,
) -> CtxResult<Json<OfficialAssignment>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let assignment = EventService::new(&state.db.events, &state.db.assignments, &state.db.users)
        .assign_official(&session.scope, &event_id, data)
        .await?;
    Ok(Json(assignment))
}

async fn get_assignments(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<OfficialAssignment>>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let assignments = EventService::new(&state.db.events, &state.db.assignments, &state.db.users)
        .list_assignments(&session.scope)
        .await?;
    Ok(Json(assignments))
}
