use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatherError {
    #[error("file not found at {path}")]
    TargetNotFound { path: PathBuf },

    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GatherError {
    pub fn target_not_found(path: impl Into<PathBuf>) -> Self {
        Self::TargetNotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::TargetNotFound { path } | Self::NotAFile { path } | Self::Read { path, .. } => {
                path
            }
        }
    }
}
