//! Load flow shared by the tools: read teams, join rosters, hand the result
//! to the configured stores.

use tracing::info;

use crate::context::Context;
use crate::error::Result;
use crate::models::Team;
use crate::names::AliasTable;
use crate::report::LoadReport;
use crate::rosters::RosterLoader;
use crate::store::{InsertSummary, JsonFileStore, MongoTeamStore, TeamStore};
use crate::teams::TeamLoader;

/// Parse both CSV files and join players into their teams.
pub fn load_teams(ctx: &Context) -> Result<(Vec<Team>, LoadReport)> {
    let aliases = if ctx.aliases_yaml.is_empty() {
        AliasTable::new()
    } else {
        let aliases = AliasTable::load(&ctx.aliases_yaml)?;
        info!("Loaded {} team aliases from: {}", aliases.len(), ctx.aliases_yaml);
        aliases
    };

    let mut teams = TeamLoader::new().load_path(&ctx.teams_csv)?;
    let report = RosterLoader::with_aliases(aliases).join_path(&ctx.rosters_csv, &mut teams)?;

    if ctx.strict {
        report.enforce_strict()?;
    }

    Ok((teams, report))
}

/// Stores selected by the context: JSON file when `json_out` is set, MongoDB
/// unless this is a dry run.
pub async fn open_stores(ctx: &Context) -> Result<Vec<Box<dyn TeamStore>>> {
    let mut stores: Vec<Box<dyn TeamStore>> = Vec::new();

    if !ctx.json_out.is_empty() {
        stores.push(Box::new(JsonFileStore::new(&ctx.json_out)));
    }

    if ctx.dry_run {
        info!("Dry run, MongoDB will not be touched");
    } else {
        stores.push(Box::new(MongoTeamStore::connect(ctx).await?));
    }

    Ok(stores)
}

/// Write the teams to every store in order, stopping at the first failure.
pub async fn store_teams(stores: &[Box<dyn TeamStore>], teams: &[Team]) -> Result<Vec<InsertSummary>> {
    let mut summaries = Vec::with_capacity(stores.len());
    for store in stores {
        let summary = store.insert_teams(teams).await?;
        info!("Inserted {} documents into {}", summary.inserted, store.name());
        summaries.push(summary);
    }
    Ok(summaries)
}
