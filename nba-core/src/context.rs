use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::*;

/// Environment context packed in structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    // From NBA_TEAMS_CSV, default ../../data/nba-teams.csv
    pub teams_csv: String,

    // From NBA_ROSTERS_CSV, default ../../data/nba-rosters.csv
    pub rosters_csv: String,

    // From NBA_ALIASES_YAML, roster team name -> abbreviation mapping, default "" (none)
    pub aliases_yaml: String,

    // From DBCONNECTIONSTRING, MongoDB URI, default ""
    #[serde(skip_serializing, default)]
    pub db_connection_string: String,

    // From NBA_DB, default "NBA"
    pub db_name: String,

    // From NBA_COLLECTION, default "Team"
    pub collection: String,

    // From NBA_CONNECT_TIMEOUT, seconds allowed for connect, server selection and ping, default 10
    pub connect_timeout_secs: u64,

    // From NBA_DRY_RUN, parse and join but do not touch the database
    pub dry_run: bool,

    // From NBA_JSON, write team documents to this JSON file, default ""
    pub json_out: String,

    // From NBA_STRICT, fail on coerced numbers and dropped players
    pub strict: bool,

    // From NBA_CTXOUT output all context data (this struct), default false
    pub ctx_out: bool,

    // From NBA_DEBUG Debug level: 0-no, 1-info, 2-verbose, default 0
    pub debug: i32,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            teams_csv: DEFAULT_TEAMS_CSV.to_string(),
            rosters_csv: DEFAULT_ROSTERS_CSV.to_string(),
            aliases_yaml: String::new(),
            db_connection_string: String::new(),
            db_name: DEFAULT_DB_NAME.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            dry_run: false,
            json_out: String::new(),
            strict: false,
            ctx_out: false,
            debug: 0,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load context from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load context from any key/value source, unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ctx = Self::default();

        if let Some(teams_csv) = lookup(ENV_TEAMS_CSV) {
            ctx.teams_csv = teams_csv;
        }

        if let Some(rosters_csv) = lookup(ENV_ROSTERS_CSV) {
            ctx.rosters_csv = rosters_csv;
        }

        if let Some(aliases_yaml) = lookup(ENV_ALIASES_YAML) {
            ctx.aliases_yaml = aliases_yaml;
        }

        // MongoDB configuration
        if let Some(conn) = lookup(ENV_CONNECTION_STRING) {
            ctx.db_connection_string = conn;
        }

        if let Some(db_name) = lookup(ENV_DB_NAME) {
            ctx.db_name = db_name;
        }

        if let Some(collection) = lookup(ENV_COLLECTION) {
            ctx.collection = collection;
        }

        if let Some(timeout) = lookup(ENV_CONNECT_TIMEOUT) {
            ctx.connect_timeout_secs = timeout.parse().unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);
        }

        if let Some(json_out) = lookup(ENV_JSON) {
            ctx.json_out = json_out;
        }

        if let Some(debug) = lookup(ENV_DEBUG) {
            ctx.debug = debug.parse().unwrap_or(0);
        }

        // Boolean flags from environment
        ctx.dry_run = lookup(ENV_DRY_RUN).is_some();
        ctx.strict = lookup(ENV_STRICT).is_some();
        ctx.ctx_out = lookup(ENV_CTXOUT).is_some();

        if ctx.teams_csv.is_empty() || ctx.rosters_csv.is_empty() {
            anyhow::bail!("{} and {} must not be empty", ENV_TEAMS_CSV, ENV_ROSTERS_CSV);
        }

        Ok(ctx)
    }

    /// Timeout budget for the database handshake
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Tracing filter matching the debug level
    pub fn log_filter(&self) -> &'static str {
        match self.debug {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
