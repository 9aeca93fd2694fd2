// Constants used throughout the NBA loader

// Default input files, relative to the working directory
pub const DEFAULT_TEAMS_CSV: &str = "../../data/nba-teams.csv";
pub const DEFAULT_ROSTERS_CSV: &str = "../../data/nba-rosters.csv";

// Default MongoDB target
pub const DEFAULT_DB_NAME: &str = "NBA";
pub const DEFAULT_COLLECTION: &str = "Team";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const ADMIN_DB: &str = "admin";

// Environment variables
pub const ENV_CONNECTION_STRING: &str = "DBCONNECTIONSTRING";
pub const ENV_TEAMS_CSV: &str = "NBA_TEAMS_CSV";
pub const ENV_ROSTERS_CSV: &str = "NBA_ROSTERS_CSV";
pub const ENV_ALIASES_YAML: &str = "NBA_ALIASES_YAML";
pub const ENV_DB_NAME: &str = "NBA_DB";
pub const ENV_COLLECTION: &str = "NBA_COLLECTION";
pub const ENV_CONNECT_TIMEOUT: &str = "NBA_CONNECT_TIMEOUT";
pub const ENV_DRY_RUN: &str = "NBA_DRY_RUN";
pub const ENV_JSON: &str = "NBA_JSON";
pub const ENV_STRICT: &str = "NBA_STRICT";
pub const ENV_CTXOUT: &str = "NBA_CTXOUT";
pub const ENV_DEBUG: &str = "NBA_DEBUG";

// CSV layouts
pub const TEAM_FIELDS: usize = 2;
pub const ROSTER_FIELDS: usize = 7;

// Roster columns
pub const COL_POSITION: usize = 0;
pub const COL_NAME: usize = 1;
pub const COL_NUMBER: usize = 2;
pub const COL_HEIGHT: usize = 3;
pub const COL_WEIGHT: usize = 4;
pub const COL_BIRTHDATE: usize = 5;
pub const COL_TEAM: usize = 6;

// Field labels used in reports
pub const NUMBER: &str = "number";
pub const WEIGHT: &str = "weight";
pub const TEAMS: &str = "teams";
pub const ROSTERS: &str = "rosters";
