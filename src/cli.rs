use clap::Parser;
use std::path::PathBuf;

use crate::logging::Verbosity;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "context-gatherer")]
#[command(
    about = "Gather a source file and its matching test file, then print the combined context",
    long_about = None
)]
pub struct Args {
    /// The path to the main file
    #[arg(value_name = "TARGET_FILE")]
    pub target_file: PathBuf,

    /// Format output with XML tags for Claude (default)
    #[arg(long, overrides_with = "no_claude")]
    pub claude: bool,

    /// Print the file contents without tags
    #[arg(long, overrides_with = "claude")]
    pub no_claude: bool,

    /// Increase verbosity (-v debug, -vv debug with source locations, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.no_claude {
            OutputFormat::Plain
        } else {
            OutputFormat::Tagged
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}
