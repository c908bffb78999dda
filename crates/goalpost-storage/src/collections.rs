use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use goalpost_core::data_files;

use crate::error::StorageError;

/// Load a whole collection from a JSON array file.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let bytes = std::fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "collection loaded");
    Ok(records)
}

/// Replace a collection file with a full snapshot of `records`.
///
/// Written to a sibling `.tmp` file first and renamed over the target, so a
/// crash mid-write never leaves a truncated file behind.
pub fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(records)?;

    let tmp_path = data_files::staging(path);
    std::fs::write(&tmp_path, &json).map_err(|source| StorageError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "collection flushed to disk");
    Ok(())
}
