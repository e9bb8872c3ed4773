//! sl-project: batch configuration files and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_batch};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Batch> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn parse_yaml(content: &str) -> ProjectResult<Batch> {
    let batch: Batch = serde_yaml::from_str(content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn save_yaml(path: &std::path::Path, batch: &Batch) -> ProjectResult<()> {
    validate_batch(batch)?;
    let content = serde_yaml::to_string(batch)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Batch> {
    let content = std::fs::read_to_string(path)?;
    let batch: Batch = serde_json::from_str(&content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn save_json(path: &std::path::Path, batch: &Batch) -> ProjectResult<()> {
    validate_batch(batch)?;
    let content = serde_json::to_string_pretty(batch)?;
    std::fs::write(path, content)?;
    Ok(())
}
