//! Axum route handler for appending generated demo data.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Upper bound per request so a typo cannot exhaust memory.
const MAX_MOCK_BATCH: usize = 10_000;

#[derive(Debug, Deserialize)]
pub struct MockRequest {
    #[serde(default)]
    pub engineers: usize,
    #[serde(default)]
    pub positions: usize,
    /// Reseeds the directory's generator; the id sequence carries on.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct MockResponse {
    pub engineer_ids: Vec<String>,
    pub position_ids: Vec<String>,
}

/// POST /api/v1/mock
pub async fn handle_generate_mock(
    State(state): State<AppState>,
    Json(request): Json<MockRequest>,
) -> Result<Json<MockResponse>, AppError> {
    if request.engineers > MAX_MOCK_BATCH || request.positions > MAX_MOCK_BATCH {
        return Err(AppError::Validation(format!(
            "At most {MAX_MOCK_BATCH} engineers and {MAX_MOCK_BATCH} positions per request"
        )));
    }

    let mut directory = state.directory.write().await;
    if let Some(seed) = request.seed {
        directory.generator.reseed(seed);
    }

    let engineers = directory.generator.generate_engineers(request.engineers);
    let positions = directory.generator.generate_positions(request.positions);

    let response = MockResponse {
        engineer_ids: engineers.iter().map(|e| e.id.clone()).collect(),
        position_ids: positions.iter().map(|p| p.id.clone()).collect(),
    };

    directory.engineers.extend(engineers);
    directory.positions.extend(positions);
    info!(
        engineers = response.engineer_ids.len(),
        positions = response.position_ids.len(),
        "Mock data appended"
    );

    Ok(Json(response))
}
