use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::types::{RenameOperation, RenameSet};

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Failed to rename file {from}: {source}")]
    Failed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Rename one file inside `directory`. No rollback is attempted on failure.
pub fn apply_rename(directory: &Path, op: &RenameOperation<'_>) -> Result<(), RenameError> {
    fs::rename(op.source_path(directory), op.destination_path(directory)).map_err(|e| {
        RenameError::Failed {
            from: op.original.to_string(),
            to: op.target.to_string(),
            source: e,
        }
    })?;

    info!("Renamed: {} -> {}", op.original, op.target);

    Ok(())
}

/// Apply every rename in set order, stopping at the first failure.
///
/// Renames applied before the failure are left in place.
pub fn apply_rename_set(directory: &Path, set: &RenameSet) -> Result<usize, RenameError> {
    let mut applied = 0;

    for op in set.operations() {
        apply_rename(directory, &op)?;
        applied += 1;
    }

    Ok(applied)
}
