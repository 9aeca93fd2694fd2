//! NBA Loader Core Library
//!
//! This library contains the core functionality for the NBA roster loader, a
//! one-shot tool that reads team and roster CSV files, joins players to their
//! teams and stores the nested team documents in MongoDB. It provides shared
//! types, configuration, the CSV loaders and the persistence layer used by
//! the loader tools.

pub mod constants;
pub mod context;
pub mod csv_source;
pub mod error;
pub mod models;
pub mod names;
pub mod pipeline;
pub mod report;
pub mod rosters;
pub mod store;
pub mod teams;

// Re-export commonly used items
pub use context::Context;
pub use error::{LoaderError, Result};
pub use models::{Player, Team};
pub use names::AliasTable;
pub use pipeline::{load_teams, open_stores, store_teams};
pub use report::{Coerced, DropReason, LoadReport};
pub use rosters::RosterLoader;
pub use store::{InsertSummary, JsonFileStore, MongoTeamStore, TeamStore};
pub use teams::TeamLoader;
