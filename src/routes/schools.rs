use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    access::filter::filter_entities_by_scope,
    entities::school::School,
    interfaces::repositories::school::SchoolRepositoryInterface,
    middleware::{ctx::Ctx, error::CtxResult, mw_ctx::CtxState},
    services::scope_service::ScopeService,
};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/api/schools", get(get_schools))
}

async fn get_schools(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<School>>> {
    let session = ScopeService::new(&state.db.users, &state.db.schools, &ctx)
        .current_scope()
        .await?;
    let schools = state.db.schools.list().await?;
    Ok(Json(filter_entities_by_scope(&session.scope, schools)?))
}
