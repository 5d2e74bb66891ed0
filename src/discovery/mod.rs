pub mod locator;
pub mod reader;

pub use locator::{candidates, locate_test_file, test_file_name, TestCandidates};
pub use reader::{gather, read_file, validate_target, GatheredContext, GatheredFile};
