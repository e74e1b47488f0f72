pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::import::handlers as import;
use crate::matching::handlers as matching;
use crate::mock::handlers as mock;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Directory API
        .route("/api/v1/skills", get(directory::handle_skill_catalog))
        .route(
            "/api/v1/engineers",
            get(directory::handle_list_engineers).post(directory::handle_create_engineer),
        )
        .route(
            "/api/v1/positions",
            get(directory::handle_list_positions).post(directory::handle_create_position),
        )
        // Import API
        .route("/api/v1/import/sample/:kind", get(import::handle_sample))
        .route("/api/v1/import/:kind", post(import::handle_import))
        // Demo data
        .route("/api/v1/mock", post(mock::handle_generate_mock))
        // Matching API
        .route(
            "/api/v1/matches",
            get(matching::handle_list_matches).post(matching::handle_run_matching),
        )
        .with_state(state)
}
