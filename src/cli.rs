use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Scan a text log file and print the lines matching a level token or free text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level token to match (uppercased before comparison) [default: info]
    #[arg(long)]
    pub lvl: Option<String>,

    /// Directory containing the log file [default: platform application-support dir]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Log filename within --dir [default: server_log.txt]
    #[arg(long)]
    pub file: Option<String>,

    /// Free text to search for (case-insensitive)
    #[arg(long)]
    pub text: Option<String>,

    /// Additional substring every printed line must contain ("" disables it)
    #[arg(long)]
    pub filter: Option<String>,

    /// TOML profile supplying defaults for the options above
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
