use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::RosterError;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, "Activity not found"),
            RosterError::AlreadyEnrolled { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Student is already signed up")
            }
            RosterError::NotEnrolled { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                "Student is not signed up for this activity",
            ),
            RosterError::InvalidParticipant => {
                Self::new(StatusCode::BAD_REQUEST, "Email must not be empty")
            }
            RosterError::Storage(cause) => {
                error!(error = %cause, "storage failure surfaced to client as 500");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
