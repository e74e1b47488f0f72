//! Axum route handlers for file import and the sample export.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::import::ingest::{engineers_from_rows, positions_from_rows, RowIssue};
use crate::import::rows::{read_rows, ImportFormat};
use crate::import::sample::{sample_csv, ImportKind};
use crate::import::ImportError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub batch: String,
    pub imported: usize,
    pub ids: Vec<String>,
    pub issues: Vec<RowIssue>,
}

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        return Ok(Upload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::Validation("Multipart body has no 'file' field".to_string()))
}

/// POST /api/v1/import/:kind
///
/// Accepts a CSV upload in the `file` field. Spreadsheet and PDF uploads are
/// rejected with 415 and a request to use CSV instead.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(kind): Path<ImportKind>,
    multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    ImportFormat::from_file_name(&upload.file_name).ensure_supported()?;

    let text = String::from_utf8(upload.bytes)
        .map_err(|_| ImportError::Malformed("file is not valid UTF-8 text".to_string()))?;
    let rows = read_rows(&text)?;
    let batch = Utc::now().timestamp_millis().to_string();

    let (ids, issues) = match kind {
        ImportKind::Engineers => {
            let decoded = engineers_from_rows(&rows, &batch);
            let ids: Vec<String> = decoded.engineers.iter().map(|e| e.id.clone()).collect();
            state.directory.write().await.engineers.extend(decoded.engineers);
            (ids, decoded.issues)
        }
        ImportKind::Positions => {
            let decoded = positions_from_rows(&rows, &batch);
            let ids: Vec<String> = decoded.positions.iter().map(|p| p.id.clone()).collect();
            state.directory.write().await.positions.extend(decoded.positions);
            (ids, decoded.issues)
        }
    };

    info!(?kind, %batch, imported = ids.len(), file = %upload.file_name, "Import committed");

    Ok(Json(ImportResponse {
        batch,
        imported: ids.len(),
        ids,
        issues,
    }))
}

/// GET /api/v1/import/sample/:kind
pub async fn handle_sample(Path(kind): Path<ImportKind>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        sample_csv(kind),
    )
}
