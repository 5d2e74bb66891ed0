use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const TEST_FILE_PREFIX: &str = "test_";
pub const TESTS_DIR: &str = "tests";

/// Candidate locations for a target's test file, in search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCandidates {
    pub in_tests_dir: PathBuf,
    pub alongside: PathBuf,
}

impl TestCandidates {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.in_tests_dir.as_path(), self.alongside.as_path()].into_iter()
    }
}

pub fn test_file_name(target: &Path) -> Option<OsString> {
    let base = target.file_name()?;
    let mut name = OsString::from(TEST_FILE_PREFIX);
    name.push(base);
    Some(name)
}

pub fn candidates(target: &Path) -> Option<TestCandidates> {
    let name = test_file_name(target)?;
    let dir = target.parent().unwrap_or_else(|| Path::new(""));

    Some(TestCandidates {
        in_tests_dir: dir.join(TESTS_DIR).join(&name),
        alongside: dir.join(&name),
    })
}

/// Returns the first candidate that is a regular file.
///
/// The `tests` subdirectory always wins over a sibling file.
pub fn locate_test_file(target: &Path) -> Option<PathBuf> {
    let candidates = candidates(target)?;

    for candidate in candidates.iter() {
        let exists = candidate.is_file();
        tracing::debug!(path = %candidate.display(), exists, "checking test file candidate");
        if exists {
            return Some(candidate.to_path_buf());
        }
    }

    None
}
