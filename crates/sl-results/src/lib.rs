//! sl-results: reports and diagrams for finished labelings.

pub mod dot;
pub mod hash;
pub mod text;
pub mod types;
pub mod writer;

pub use dot::{render_dot, should_render, to_petgraph};
pub use hash::compute_digest;
pub use text::render_text;
pub use types::*;
pub use writer::{ReportPaths, ReportWriter};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report not found: {stem}")]
    ReportNotFound { stem: String },
}
