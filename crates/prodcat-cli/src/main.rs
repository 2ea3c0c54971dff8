mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "prodcat")]
#[command(about = "Fetch a product catalog and report price tiers and averages")]
struct Cli {
    /// Catalog endpoint returning a JSON array (overrides `PRODCAT_API_URL`).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// HTML report path (overrides `PRODCAT_OUTPUT_PATH`).
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the table and averages, then write the HTML report (default).
    All,
    /// Print the table and averages only.
    Print,
    /// Write the HTML report only.
    Html,
}

impl From<Commands> for OutputMode {
    fn from(command: Commands) -> Self {
        match command {
            Commands::All => OutputMode::Both,
            Commands::Print => OutputMode::Console,
            Commands::Html => OutputMode::Html,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = prodcat_core::load_app_config()?.with_overrides(cli.endpoint, cli.output);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mode = cli.command.map_or(OutputMode::Both, OutputMode::from);
    let stdout = std::io::stdout();
    report::run_report(&config, mode, &mut stdout.lock()).await
}
