mod http;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Terminal client for the todo API.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = "http://127.0.0.1:5000/api")]
    api_url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr and stay silent unless RUST_LOG is set;
    // the TUI owns the terminal.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(api_url = %cli.api_url, "starting todo TUI");

    ui::run_tui(&cli.api_url)
}
