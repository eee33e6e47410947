pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/job-roles", get(handlers::handle_job_roles))
        .route("/process-files", post(handlers::handle_process_files))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
