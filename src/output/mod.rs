mod formatter;

pub use formatter::{OutputFormat, OutputFormatter, TEST_FILE_SEPARATOR};
