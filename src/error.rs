// src/error.rs
// Typed failures for the research pipeline. Lookup errors are recovered by
// the caller with placeholder text; generation errors abort the query.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("missing configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generation endpoint returned an unusable payload: {0}")]
    MalformedResponse(String),
}
