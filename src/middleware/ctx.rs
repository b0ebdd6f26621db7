use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use super::error::{AppError, AppResult, CtxError, CtxResult};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};

/// Per-request session: the authenticated user id, or why there is none.
#[derive(Clone, Debug)]
pub struct Ctx {
    result_user_id: AppResult<String>,
}

impl Ctx {
    pub fn new(result_user_id: AppResult<String>) -> Self {
        Self { result_user_id }
    }

    pub fn user_id(&self) -> CtxResult<String> {
        self.result_user_id.clone().map_err(CtxError::from)
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError::from(error)
    }
}

#[async_trait]
impl FromRequestParts<Arc<CtxState>> for Ctx {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state): State<Arc<CtxState>> = State::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        let cookies = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let user_id = match cookies.get(JWT_KEY) {
            Some(cookie) => app_state
                .jwt
                .decode(cookie.value())
                .map(|claims| claims.sub)
                .map_err(|err| {
                    debug!("->> jwt cookie rejected: {err}");
                    AppError::from(err)
                }),
            None => Err(AppError::AuthFailNoJwtCookie),
        };

        Ok(Ctx::new(user_id))
    }
}
