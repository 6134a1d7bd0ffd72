use std::path::PathBuf;

use clap::Parser;

use pagestack::config::Config;
use pagestack::error::PageResult;

/// Terminal demo for the pagestack navigation library.
#[derive(Debug, Parser)]
#[command(name = "pagestack-demo", version)]
struct Cli {
    /// Path to a TOML config file; defaults to the standard config
    /// locations when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> PageResult<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    pagestack::demo::run(config).await
}
