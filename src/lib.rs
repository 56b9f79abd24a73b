pub mod agents;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

/// Build the HTTP router with all `/api` routes
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/chat", post(handlers::post_chat))
        .route("/personas", get(handlers::list_personas))
        .route("/personas/{id}", get(handlers::get_persona_by_id))
        .route("/health", get(handlers::health_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
