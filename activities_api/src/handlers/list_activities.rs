use axum::{Json, extract::State};
use types::Activities;

use crate::AppState;

#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<AppState>) -> Json<Activities> {
    Json(state.activities().await)
}
