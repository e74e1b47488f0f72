//! Axum route handlers for the Matching API.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::filter::{present, PresentedMatch, ResultQuery, Selection};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub scorer_backend: String,
    pub engineers: usize,
    pub positions: usize,
    pub result_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<PresentedMatch>,
    /// Size of the stored result set before filtering.
    pub total_results: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Scores the selected engineers against the selected positions (empty id
/// lists select everything) and replaces the stored result set.
/// The run executes on the blocking pool against cloned snapshots; on timeout
/// its output is discarded and the previous result set is kept.
pub async fn handle_run_matching(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<RunResponse>, AppError> {
    let (engineers, positions) = {
        let directory = state.directory.read().await;
        selection.resolve(&directory.engineers, &directory.positions)
    };

    if engineers.is_empty() || positions.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Register at least one engineer and one position before matching".to_string(),
        ));
    }

    let pairs = engineers.len().saturating_mul(positions.len());
    if pairs > state.config.match_pair_limit {
        return Err(AppError::Validation(format!(
            "{pairs} pairs exceeds the limit of {}; narrow the selection",
            state.config.match_pair_limit
        )));
    }

    let engineer_count = engineers.len();
    let position_count = positions.len();
    let scorer = Arc::clone(&state.scorer);
    let timeout = Duration::from_secs(state.config.match_timeout_secs);

    let task = tokio::task::spawn_blocking(move || scorer.calculate_matches(&engineers, &positions));
    let results = tokio::time::timeout(timeout, task)
        .await
        .map_err(|_| AppError::Timeout(format!("Matching {pairs} pairs took longer than {timeout:?}")))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Matching task failed: {e}")))?;

    let result_count = results.len();
    state.directory.write().await.results = results;
    info!(pairs, result_count, "Stored matching results");

    Ok(Json(RunResponse {
        scorer_backend: state.scorer.backend().to_string(),
        engineers: engineer_count,
        positions: position_count,
        result_count,
    }))
}

/// GET /api/v1/matches
///
/// Sorted, filtered view of the latest result set. Results referencing
/// entities that cannot be resolved are skipped. An unknown `position_id`
/// filter is a 404.
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> Result<Json<MatchListResponse>, AppError> {
    let directory = state.directory.read().await;
    if let Some(id) = &query.position_id {
        if !directory.positions.iter().any(|p| &p.id == id) {
            return Err(AppError::NotFound(format!("Position '{id}' does not exist")));
        }
    }

    let matches = present(
        &directory.results,
        &directory.engineers,
        &directory.positions,
        &query,
    );

    Ok(Json(MatchListResponse {
        matches,
        total_results: directory.results.len(),
    }))
}
