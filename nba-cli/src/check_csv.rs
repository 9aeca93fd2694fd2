use clap::Command;
use nba_core::{load_teams, Context, Result};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let ctx = Context::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(ctx.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let _matches = Command::new("nba-check-csv")
        .version("0.1.0")
        .about("Parse and join the NBA team and roster CSV files without touching the database")
        .author("NBA Loader Developers")
        .get_matches();

    let (teams, report) = match load_teams(&ctx) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("✗ CSV check failed: {}", err);
            return Err(err);
        }
    };

    for team in &teams {
        if team.players.is_empty() {
            warn!("{} ({}) has no players", team.full_name(), team.abbreviation);
        } else {
            info!("{} ({}): {} players", team.full_name(), team.abbreviation, team.players.len());
        }
    }

    // Report goes to stdout so it can be piped
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_clean() {
        info!("✓ CSV files are consistent");
    }
    Ok(())
}
