use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use context_gatherer::{cli, gather, logging, OutputFormatter};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbosity());

    let context = gather(&args.target_file).context("Failed to gather context")?;

    let format = args.output_format();
    tracing::debug!(format = format.as_str(), "rendering combined context");
    tracing::info!("--- Combined Context ---");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    OutputFormatter::write_context(&mut out, &context, format)
        .context("Failed to write combined context")?;

    Ok(())
}
