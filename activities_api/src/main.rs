use activities_api::{AppState, Config};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Initialize the application context (which also initializes tracing)
    let state = match mh_app::create_app_context::<AppState, Config>().await {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Error loading configuration: {err}");
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from((state.config.host, state.config.port));
    let app = activities_api::app(state);

    if let Err(err) = mh_axum::run_app(app, addr).await {
        tracing::error!("server error: {err}");
        std::process::exit(1);
    }
}
