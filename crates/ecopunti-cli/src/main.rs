use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod discover;

#[derive(Debug, Parser)]
#[command(name = "ecopunti")]
#[command(about = "Find nearby waste-collection points")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Query the geodata service for collection points around a coordinate.
    Discover(discover::DiscoverArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ecopunti_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Discover(args) => discover::run_discover(&config, &args).await,
    }
}
