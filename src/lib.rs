pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod printer;
pub mod reader;
pub mod search;

use anyhow::Context;
use std::io::{self, BufWriter, Write};

pub use cli::{Cli, cli_parse};
pub use config::{ConfigError, ScanConfig, ScanProfile, load_config, resolve_directory};
pub use error::ScanError;
pub use filter::LineFilter;
pub use reader::LogFile;
pub use search::{ScanSummary, scan_lines, scan_log};

/// Prints the settings banner followed by the matching lines of the configured log.
pub fn scan_to(config: &ScanConfig, out: &mut impl Write) -> anyhow::Result<ScanSummary> {
    printer::write_banner(out, config).context("Failed to write settings")?;
    // Banner goes out even if the log file turns out to be unreadable.
    out.flush().context("Failed to write settings")?;

    let summary = scan_log(config, out)?;
    out.flush().context("Failed to write output")?;
    Ok(summary)
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    logging::init(cli.verbose);

    let profile = load_config(cli.config.as_deref()).context("Failed to load config")?;
    let config = ScanConfig::resolve(&cli, &profile);
    tracing::debug!(
        path = %config.log_path().display(),
        level = %config.level,
        "Scan configured"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = scan_to(&config, &mut out)?;

    tracing::info!(
        lines_read = summary.lines_read,
        lines_matched = summary.lines_matched,
        "Scan finished"
    );
    Ok(())
}
