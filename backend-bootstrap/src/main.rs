use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "eventdesk-backend")]
#[command(about = "Eventdesk Backend Server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server (default)
    Serve,
    /// Rewrite legacy date separators in the events file
    NormalizeDates,
    /// Remap oversized identifiers to compact sequential ones (backs up the
    /// data files first)
    RemapIds,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("EVENTDESK_CONFIG", config);
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => backend_bootstrap::run_standalone().await,
        Command::NormalizeDates => backend_bootstrap::normalize_dates().await,
        Command::RemapIds => backend_bootstrap::remap_ids().await,
    }
}
