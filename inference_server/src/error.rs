use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Failed to read model artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact: {0}")]
    ArtifactFormat(#[from] serde_json::Error),

    #[error("X has {got} features, but the model is expecting {expected} features as input")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),
}
