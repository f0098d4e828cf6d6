use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Health check endpoint
pub mod health;
/// Image upload endpoint
pub mod upload;

/// Creates the router with all handler routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        .route("/upload", post(upload::upload_image))
}
