//! Seed command: create tables and load placeholder data

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use invoicectl_server::db::connect_pool;
use invoicectl_server::seed;

use super::db::DbArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let db_config = args
        .db
        .to_config()
        .context("Database configuration incomplete. Set MYSQL_* in the environment or .env")?;

    let pool = connect_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}:{}", db_config.host, db_config.port))?;

    let report = seed::run(&pool).await.context("Seeding failed")?;
    pool.close().await;

    if args.json {
        println!(
            "{}",
            json!({
                "message": "Database seeded successfully",
                "inserted": report,
            })
        );
    } else {
        println!("Database seeded successfully");
        println!("  users:     {}", report.users);
        println!("  customers: {}", report.customers);
        println!("  revenue:   {}", report.revenue);
        println!("  invoices:  {}", report.invoices);
    }

    Ok(())
}
