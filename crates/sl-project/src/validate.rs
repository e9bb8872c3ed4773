//! Batch validation.

use std::collections::HashSet;

use sl_core::SlError;
use thiserror::Error;

use crate::schema::{Batch, LATEST_VERSION};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("unsupported batch version {found} (latest is {LATEST_VERSION})")]
    Version { found: u32 },

    #[error("batch has no runs")]
    Empty,

    #[error("run id must not be empty")]
    EmptyId,

    #[error("duplicate run id `{id}`")]
    DuplicateId { id: String },

    #[error("run `{id}`: {source}")]
    Params {
        id: String,
        #[source]
        source: SlError,
    },
}

/// Check version, run ids and that every run's parameters are accepted.
pub fn validate_batch(batch: &Batch) -> Result<(), ValidationError> {
    if batch.version == 0 || batch.version > LATEST_VERSION {
        return Err(ValidationError::Version {
            found: batch.version,
        });
    }
    if batch.runs.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut ids = HashSet::new();
    for run in &batch.runs {
        if run.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if !ids.insert(run.id.as_str()) {
            return Err(ValidationError::DuplicateId { id: run.id.clone() });
        }
        run.params().map_err(|source| ValidationError::Params {
            id: run.id.clone(),
            source,
        })?;
    }
    Ok(())
}
