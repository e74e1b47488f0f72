// Import pipeline: uploaded delimited text → rows → Engineer/Position batches.
// Binary spreadsheet and PDF uploads are recognised only to be rejected.

pub mod handlers;
pub mod ingest;
pub mod rows;
pub mod sample;
pub mod skill_parser;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    #[error("No data found to import")]
    Empty,

    #[error("Malformed CSV: {0}")]
    Malformed(String),
}
