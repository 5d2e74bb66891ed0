use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::locator::locate_test_file;
use crate::error::{GatherError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheredFile {
    pub path: PathBuf,
    pub content: String,
}

/// A target file and, when one was found, its test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheredContext {
    pub source: GatheredFile,
    pub test: Option<GatheredFile>,
}

pub fn validate_target(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GatherError::target_not_found(path));
    }
    if !path.is_file() {
        return Err(GatherError::not_a_file(path));
    }
    Ok(())
}

pub fn read_file(path: &Path) -> Result<GatheredFile> {
    let content = fs::read_to_string(path).map_err(|e| GatherError::read(path, e))?;
    Ok(GatheredFile {
        path: path.to_path_buf(),
        content,
    })
}

/// Validates `target`, reads it, then looks for and reads its test file.
pub fn gather(target: &Path) -> Result<GatheredContext> {
    validate_target(target)?;

    let source = read_file(target)?;
    tracing::info!("Successfully read {}", target.display());

    let test = match locate_test_file(target) {
        Some(test_path) => {
            let test = read_file(&test_path)?;
            tracing::info!("Found and read test file at {}", test_path.display());
            Some(test)
        }
        None => {
            tracing::warn!("Could not find a corresponding test file.");
            None
        }
    };

    Ok(GatheredContext { source, test })
}
