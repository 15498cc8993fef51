//! HTTP API for viewing Mergington High School's extracurricular activities
//! and signing students up for them or withdrawing them.
//!
//! Routes:
//! - `GET /activities`
//! - `POST /activities/{activity_name}/signup?email=`
//! - `DELETE /activities/{activity_name}/unregister?email=`
//! - `GET /health`
use axum::{
    Router,
    routing::{delete, get, post},
};

mod catalogue;
mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, Config};

/// Builds the full application router around `state`.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/activities", get(handlers::list_activities::handler))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::signup::handler),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::unregister::handler),
        )
        .with_state(state);

    mh_axum::with_common_layers(router)
}
