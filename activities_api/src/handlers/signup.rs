use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use types::{EmailQuery, MessageResponse};

use crate::{ApiError, AppState};

#[tracing::instrument(skip(state, query))]
pub async fn handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) =
        query.map_err(|err| ApiError::InvalidQuery(err.body_text()))?;

    let response = state.signup(&activity_name, &email).await?;
    tracing::info!(%email, "signed up");

    Ok(Json(response))
}
