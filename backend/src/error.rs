use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::Role;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing Authorization header")]
    MissingToken,
    #[error("Invalid Authorization header format")]
    MalformedToken,
    #[error("Invalid or expired token")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Session no longer signed in as {0:?}")]
    SessionEnded(Role),
    #[error("Could not issue token: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),
    #[error("This page requires the {0:?} role")]
    Forbidden(Role),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken
            | ApiError::MalformedToken
            | ApiError::InvalidToken(_)
            | ApiError::SessionEnded(_) => StatusCode::UNAUTHORIZED,
            ApiError::TokenIssue(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Session(SessionError::InvalidEmail(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Session(SessionError::WrongStep { .. }) => StatusCode::CONFLICT,
            ApiError::Session(SessionError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LoginStep;

    #[test]
    fn statuses_by_kind() {
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::SessionEnded(Role::Investor).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden(Role::Owner).status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(SessionError::InvalidEmail("x".to_string())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(SessionError::WrongStep { expected: LoginStep::Role }).status(),
            StatusCode::CONFLICT
        );
    }
}
