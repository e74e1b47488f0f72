//! Axum route handlers for engineer/position registration and search.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::directory::{NewEngineer, NewPosition};
use crate::errors::AppError;
use crate::matching::filter::{EngineerQuery, PositionQuery};
use crate::mock::fixtures::SKILL_CATALOG;
use crate::models::{Engineer, Position};
use crate::state::AppState;

/// `?keyword=...&skills=React,Go`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    /// Comma-separated skill names; all must be present.
    pub skills: Option<String>,
}

impl SearchParams {
    fn skill_names(&self) -> Vec<String> {
        self.skills
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    /// Entries passing the filters.
    pub matched: usize,
    pub total: usize,
}

/// GET /api/v1/skills
pub async fn handle_skill_catalog() -> Json<Vec<&'static str>> {
    Json(SKILL_CATALOG.to_vec())
}

/// GET /api/v1/engineers
pub async fn handle_list_engineers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ListResponse<Engineer>> {
    let query = EngineerQuery {
        keyword: params.keyword.clone(),
        skills: params.skill_names(),
    };
    let directory = state.directory.read().await;
    let items: Vec<Engineer> = query.apply(&directory.engineers).into_iter().cloned().collect();

    Json(ListResponse {
        matched: items.len(),
        total: directory.engineers.len(),
        items,
    })
}

/// POST /api/v1/engineers
pub async fn handle_create_engineer(
    State(state): State<AppState>,
    Json(request): Json<NewEngineer>,
) -> Result<(StatusCode, Json<Engineer>), AppError> {
    let engineer = request.into_engineer()?;
    state.directory.write().await.engineers.push(engineer.clone());
    info!(id = %engineer.id, "Engineer registered");
    Ok((StatusCode::CREATED, Json(engineer)))
}

/// GET /api/v1/positions
pub async fn handle_list_positions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ListResponse<Position>> {
    let query = PositionQuery {
        keyword: params.keyword.clone(),
        skills: params.skill_names(),
    };
    let directory = state.directory.read().await;
    let items: Vec<Position> = query.apply(&directory.positions).into_iter().cloned().collect();

    Json(ListResponse {
        matched: items.len(),
        total: directory.positions.len(),
        items,
    })
}

/// POST /api/v1/positions
pub async fn handle_create_position(
    State(state): State<AppState>,
    Json(request): Json<NewPosition>,
) -> Result<(StatusCode, Json<Position>), AppError> {
    let position = request.into_position()?;
    state.directory.write().await.positions.push(position.clone());
    info!(id = %position.id, "Position registered");
    Ok((StatusCode::CREATED, Json(position)))
}
