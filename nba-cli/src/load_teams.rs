use clap::Command;
use nba_core::{load_teams, open_stores, store_teams, Context, Result};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Loads values from .env into the process environment
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize context from environment
    let ctx = Context::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(ctx.log_filter())
        .init();

    let _matches = Command::new("nba-load-teams")
        .version("0.1.0")
        .about("Load NBA teams and rosters from CSV into MongoDB")
        .author("NBA Loader Developers")
        .get_matches();

    if !dotenv_loaded {
        info!("No .env file found");
    }

    if ctx.ctx_out {
        info!("Context: {}", serde_json::to_string(&ctx).unwrap_or_default());
    }

    let (teams, report) = match load_teams(&ctx) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("Loading CSV files failed: {}", err);
            return Err(err);
        }
    };

    let stores = open_stores(&ctx).await?;
    if stores.is_empty() {
        info!("No store configured, {} teams parsed and discarded", teams.len());
        return Ok(());
    }

    let summaries = match store_teams(&stores, &teams).await {
        Ok(summaries) => summaries,
        Err(err) => {
            error!("✗ Insert failed: {}", err);
            return Err(err);
        }
    };

    for summary in &summaries {
        info!("Inserted documents: {:?}", summary.ids);
    }

    info!(
        "Load completed: {} teams, {} players, {} dropped",
        teams.len(),
        report.joined,
        report.dropped.len()
    );
    Ok(())
}
