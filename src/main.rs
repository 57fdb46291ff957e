use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod handlers;
mod helpers;
mod router;
mod schemas;

mod test_utils;

use cli::Cli;

/// Main entry point for the Superstore application.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads SUPERSTORE_CONFIG
    dotenvy::dotenv().ok();

    // Initialize tracing; reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "superstore=debug,compute=debug,model=info,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
