use engine::utils::UnknownLabel;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{entity} '{id}': {source}")]
    Label {
        entity: &'static str,
        id: String,
        #[source]
        source: UnknownLabel,
    },
    #[error("{entity} '{id}' references unknown {target} '{target_id}'")]
    DanglingReference {
        entity: &'static str,
        id: String,
        target: &'static str,
        target_id: String,
    },
}
