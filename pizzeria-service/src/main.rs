use clap::{Parser, Subcommand};
use pizzeria_service::{db, establish_pool, seed};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Replace all data with the sample restaurants and pizzas
    Seed,
}

pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let pool = establish_pool()?;
    match &cli.command {
        Commands::Migrate => db::run_migrations(&pool),
        Commands::Seed => seed::migrate_and_seed(&pool),
    }
}
