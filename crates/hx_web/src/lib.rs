use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router: dataset and analyze endpoints, permissive CORS,
/// and a static-file fallback for the front-end assets.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();
    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/headlines", get(handlers::list_headlines))
        .route("/analyze", post(handlers::analyze))
        .fallback_service(assets)
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use hx_core::{Error, Explainer, HeadlineRecord, Result};
}
