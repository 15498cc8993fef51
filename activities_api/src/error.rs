use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use types::ErrorDetail;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp
            | Self::NotSignedUp
            | Self::ActivityFull
            | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, "request rejected: {self}");

        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
