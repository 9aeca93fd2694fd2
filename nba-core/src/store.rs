//! Persistence of the joined team documents
//!
//! The whole team list is written as one batch. There are no retries: any
//! connection, ping or insert failure is returned to the caller.

use std::path::PathBuf;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::Serialize;
use tracing::{error, info};

use crate::constants::ADMIN_DB;
use crate::context::Context;
use crate::error::{LoaderError, Result};
use crate::models::Team;

/// Result of a batch insert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertSummary {
    pub inserted: usize,
    pub ids: Vec<String>,
}

/// Destination for the loaded teams
#[async_trait]
pub trait TeamStore: Send + Sync {
    fn name(&self) -> &str;

    async fn insert_teams(&self, teams: &[Team]) -> Result<InsertSummary>;
}

/// MongoDB collection holding one document per team
pub struct MongoTeamStore {
    collection: Collection<Team>,
    target: String,
}

impl MongoTeamStore {
    /// Connect using the context's connection string and check the server
    /// answers a ping within the connect timeout.
    pub async fn connect(ctx: &Context) -> Result<Self> {
        let timeout = ctx.connect_timeout();

        let mut options = ClientOptions::parse(&ctx.db_connection_string)
            .await
            .map_err(|err| LoaderError::Database(format!("Invalid connection string: {}", err)))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some("nba-loader".to_string());

        let client = Client::with_options(options)?;

        match tokio::time::timeout(
            timeout,
            client.database(ADMIN_DB).run_command(doc! { "ping": 1 }, None),
        )
        .await
        {
            Ok(Ok(_)) => info!("✓ Database connection successful"),
            Ok(Err(err)) => {
                error!("✗ Database ping failed: {}", err);
                return Err(err.into());
            }
            Err(_) => {
                error!("✗ Database ping timed out after {:?}", timeout);
                return Err(LoaderError::Database(format!(
                    "ping timed out after {:?}",
                    timeout
                )));
            }
        }

        let collection = client
            .database(&ctx.db_name)
            .collection::<Team>(&ctx.collection);

        Ok(Self {
            collection,
            target: format!("mongodb {}.{}", ctx.db_name, ctx.collection),
        })
    }
}

#[async_trait]
impl TeamStore for MongoTeamStore {
    fn name(&self) -> &str {
        &self.target
    }

    async fn insert_teams(&self, teams: &[Team]) -> Result<InsertSummary> {
        if teams.is_empty() {
            return Err(LoaderError::Database("no teams to insert".to_string()));
        }

        let result = self.collection.insert_many(teams, None).await?;

        let mut ids: Vec<(usize, String)> = result
            .inserted_ids
            .into_iter()
            .map(|(i, id)| (i, id.to_string()))
            .collect();
        ids.sort_by_key(|(i, _)| *i);

        Ok(InsertSummary {
            inserted: ids.len(),
            ids: ids.into_iter().map(|(_, id)| id).collect(),
        })
    }
}

/// Pretty printed JSON array of team documents
pub struct JsonFileStore {
    path: PathBuf,
    target: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let target = format!("json {}", path.display());
        Self { path, target }
    }
}

#[async_trait]
impl TeamStore for JsonFileStore {
    fn name(&self) -> &str {
        &self.target
    }

    async fn insert_teams(&self, teams: &[Team]) -> Result<InsertSummary> {
        let json = serde_json::to_string_pretty(teams)?;
        tokio::fs::write(&self.path, json).await?;

        Ok(InsertSummary {
            inserted: teams.len(),
            ids: teams.iter().map(|t| t.abbreviation.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    fn thunder() -> Team {
        let mut team = Team::new("Thunder", "Oklahoma City", "OKC");
        team.players.push(Player {
            name: "Chris Paul".to_string(),
            number: 3,
            position: "PG".to_string(),
            height: "6'0".to_string(),
            weight: 175,
            birthdate: "1985-05-06".to_string(),
        });
        team
    }

    #[tokio::test]
    async fn json_store_writes_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        let store = JsonFileStore::new(&path);

        let teams = vec![thunder(), Team::new("Heat", "Miami", "MIA")];
        let summary = store.insert_teams(&teams).await.unwrap();
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.ids, vec!["OKC", "MIA"]);

        let written: Vec<Team> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, teams);
        assert!(store.name().starts_with("json "));
    }

    #[tokio::test]
    async fn json_store_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("teams.json"));
        let err = store.insert_teams(&[thunder()]).await.unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }

    #[tokio::test]
    async fn mongo_store_rejects_missing_connection_string() {
        let ctx = Context::new();
        let err = MongoTeamStore::connect(&ctx).await.err().unwrap();
        assert!(matches!(err, LoaderError::Database(_)));
    }
}
