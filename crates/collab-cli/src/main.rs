//! Collab CLI
//!
//! Serves the Collab tool set (text-file range editing plus git
//! pass-through) to an automated client over a line-delimited JSON
//! protocol on stdin/stdout.
//!
//! ```bash
//! collab --working-dir /srv/checkouts serve
//! collab tools   # print the registered tool schemas
//! ```

mod args;
mod serve;

use anyhow::Result;
use args::{Args, Command};
use clap::Parser;
use collab_core::tools::ToolRegistryBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = ToolRegistryBuilder::new()
        .with_tools(collab_tools::get_default_tools(args.working_dir.clone()))
        .build();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve::run(&registry).await,
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&registry.schemas())?);
            Ok(())
        }
    }
}
