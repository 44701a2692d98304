//! One-time load of a site data file.

use listing::{LoadError, LoadOutcome, Record, parse_records};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Parse { path: PathBuf, source: LoadError },
}

pub async fn read_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    debug!("loading records from {}", path.display());
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(&text).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load records, reducing any failure to an unsuccessful, empty outcome.
pub async fn load(path: &Path) -> LoadOutcome {
    let outcome = LoadOutcome::from_result(read_records(path).await);
    if outcome.ok {
        info!("{} records loaded from {}", outcome.records.len(), path.display());
    }
    outcome
}
