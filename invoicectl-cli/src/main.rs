//! invoicectl CLI - invoice dashboard backend
//!
//! Entry point for the `invoicectl` command-line tool:
//! - `serve` runs the dashboard HTTP API
//! - `seed` creates the schema and loads placeholder data
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so MYSQL_* settings can live there.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "invoicectl",
    author,
    version,
    about = "Invoice dashboard backend: listing, search, form actions and seeding over MySQL"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the dashboard HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create tables and load placeholder data (idempotent)
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine, variables may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}
