//! HTTP server command for the invoice dashboard API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use invoicectl_server::db::create_pool;
use invoicectl_server::http::{run_server, ServerConfig};
use invoicectl_server::SimulatedLatency;

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip the artificial delays on the revenue and latest-invoices queries
    #[arg(long)]
    pub no_simulated_latency: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args
        .db
        .to_config()
        .context("Database configuration incomplete. Set MYSQL_* in the environment or .env")?;

    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        "Starting invoicectl server on {}",
        args.bind
    );

    // Lazy pool: the first request opens the connection
    let pool = create_pool(&db_config);

    let latency = if args.no_simulated_latency {
        SimulatedLatency::none()
    } else {
        SimulatedLatency::default()
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        latency,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
