//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "collab",
    version,
    about = "File editing and git operations served as callable tools"
)]
pub struct Args {
    /// Root directory for file and git operations
    #[arg(long, short = 'w', default_value = ".")]
    pub working_dir: PathBuf,

    /// Log filter, e.g. "info" or "collab_tools=debug"
    #[arg(long, default_value = "info", env = "COLLAB_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve tool calls as line-delimited JSON on stdin/stdout (default)
    Serve,
    /// Print the registered tool schemas as JSON and exit
    Tools,
}
