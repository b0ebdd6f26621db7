use std::fmt;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    AccessDenied,
    AuthenticationFail,
    AuthFailNoJwtCookie,
    AuthFailJwtInvalid { source: String },
    EntityFailIdNotFound { ident: String },
    Validation { description: String },
    SurrealDb { source: String },
}

/// Handler result, carries the request id reported to the client.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error produced before a response is composed.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

impl From<surrealdb::Error> for CtxError {
    fn from(value: surrealdb::Error) -> Self {
        CtxError::from(AppError::from(value))
    }
}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::AccessDenied => write!(f, "Access denied: Out of scope"),
            Self::AuthenticationFail => write!(f, "Authentication failed"),
            Self::AuthFailNoJwtCookie => write!(f, "You are not logged in"),
            Self::AuthFailJwtInvalid { .. } => write!(f, "The provided JWT token is not valid"),
            Self::EntityFailIdNotFound { ident } => write!(f, "Record id= {ident} not found"),
            Self::Validation { description } => write!(f, "{description}"),
            Self::SurrealDb { .. } => write!(f, "{INTERNAL}"),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::AuthenticationFail
            | AppError::AuthFailNoJwtCookie
            | AppError::AuthFailJwtInvalid { .. } => StatusCode::UNAUTHORIZED,
            AppError::EntityFailIdNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Generic { .. }
            | AppError::Validation { .. }
            | AppError::SurrealDb { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    pub error: String,
    pub req_id: String,
}

impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        warn!("->> {:<12} - into_response - {self:?}", "ERROR");
        let status_code = self.error.status_code();
        let body = ErrorResponseBody {
            error: self.error.to_string(),
            req_id: self.req_id.to_string(),
        };
        let mut response = (status_code, Json(body)).into_response();
        // the logger reads the real error from the extensions
        response.extensions_mut().insert(self.error);
        response
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::AuthFailJwtInvalid {
            source: value.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validation {
            description: value.to_string(),
        }
    }
}

impl From<CtxError> for AppError {
    fn from(value: CtxError) -> Self {
        value.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_message_and_status() {
        let err = AppError::AccessDenied;
        assert_eq!(err.to_string(), "Access denied: Out of scope");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn db_errors_do_not_leak_details() {
        let err = AppError::SurrealDb {
            source: "table event does not exist".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error");
    }

    #[test]
    fn missing_session_is_unauthorized() {
        assert_eq!(
            AppError::AuthFailNoJwtCookie.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
