use std::path::PathBuf;

use thiserror::Error;

// Unified error type for solvis

#[derive(Error, Debug)]
pub enum VizError {
    #[error("cannot read {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {detail}", path.display())]
    Format { path: PathBuf, detail: String },
    #[error("render error: {0}")]
    Render(String),
}

impl VizError {
    /// Build a `Format` error for `path` with a preformatted detail message.
    pub fn format(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        VizError::Format {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
