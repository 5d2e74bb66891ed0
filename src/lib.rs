/// Context Gatherer
///
/// Finds a source file's companion test file (`tests/test_<name>` first, then
/// `test_<name>` alongside it) and prints both, tagged or plain.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;

pub use discovery::{gather, GatheredContext, GatheredFile};
pub use error::{GatherError, Result};
pub use output::{OutputFormat, OutputFormatter};
