//! Load report - data quality outcomes collected while loading
//!
//! Numbers that had to be defaulted, players that joined no team and players
//! that joined more than one team are recorded here instead of being hidden.

use serde::Serialize;
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::{LoaderError, Result};

/// Outcome of a lenient field parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Coerced<T> {
    Parsed(T),
    /// The raw value did not parse and the type's default was used instead
    Defaulted { raw: String },
}

impl<T> Coerced<T>
where
    T: FromStr + Default,
{
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<T>() {
            Ok(value) => Coerced::Parsed(value),
            Err(_) => Coerced::Defaulted {
                raw: raw.to_string(),
            },
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Coerced::Parsed(value) => value,
            Coerced::Defaulted { .. } => T::default(),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coerced::Defaulted { .. })
    }
}

/// Why a player ended up on no team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DropReason {
    /// No team has the short name extracted from the roster team field
    NoTeamNamed(String),
    /// The alias table maps the team field to an abbreviation no team has
    UnknownAlias(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedPlayer {
    pub row: u64,
    pub player: String,
    pub team_field: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coercion {
    pub row: u64,
    pub player: String,
    pub field: &'static str,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousJoin {
    pub row: u64,
    pub player: String,
    pub team_name: String,
    /// Abbreviations of every team the player was appended to
    pub matches: Vec<String>,
}

/// Summary of one loader run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub teams: usize,
    pub roster_rows: u64,
    /// Player placements, a player joined to two teams counts twice
    pub joined: usize,
    pub dropped: Vec<DroppedPlayer>,
    pub coercions: Vec<Coercion>,
    pub ambiguous: Vec<AmbiguousJoin>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.coercions.is_empty() && self.ambiguous.is_empty()
    }

    pub fn record_coercion(&mut self, row: u64, player: &str, field: &'static str, raw: &str) {
        warn!(
            "Row {}: {} '{}' for {} is not a number, using 0",
            row, field, raw, player
        );
        self.coercions.push(Coercion {
            row,
            player: player.to_string(),
            field,
            raw: raw.to_string(),
        });
    }

    pub fn record_drop(&mut self, row: u64, player: &str, team_field: &str, reason: DropReason) {
        warn!(
            "Row {}: dropping {}, no team for '{}' ({:?})",
            row, player, team_field, reason
        );
        self.dropped.push(DroppedPlayer {
            row,
            player: player.to_string(),
            team_field: team_field.to_string(),
            reason,
        });
    }

    pub fn record_ambiguous(&mut self, row: u64, player: &str, team_name: &str, matches: Vec<String>) {
        warn!(
            "Row {}: {} matches {} teams named '{}': {}",
            row,
            player,
            matches.len(),
            team_name,
            matches.join(", ")
        );
        self.ambiguous.push(AmbiguousJoin {
            row,
            player: player.to_string(),
            team_name: team_name.to_string(),
            matches,
        });
    }

    /// Turn recorded coercions and drops into an error
    pub fn enforce_strict(&self) -> Result<()> {
        if self.coercions.is_empty() && self.dropped.is_empty() {
            return Ok(());
        }
        Err(LoaderError::Strict(format!(
            "{} coerced numbers and {} dropped players",
            self.coercions.len(),
            self.dropped.len()
        )))
    }

    pub fn log_summary(&self) {
        info!(
            "Loaded {} teams, {} roster rows, {} players joined",
            self.teams, self.roster_rows, self.joined
        );
        if !self.is_clean() {
            warn!(
                "Data quality: {} dropped, {} coerced, {} ambiguous",
                self.dropped.len(),
                self.coercions.len(),
                self.ambiguous.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_parse() {
        let number: Coerced<i32> = Coerced::parse("23");
        assert_eq!(number, Coerced::Parsed(23));
        assert!(!number.is_defaulted());
        assert_eq!(number.into_value(), 23);
    }

    #[test]
    fn non_numeric_values_default_to_zero() {
        let number: Coerced<i32> = Coerced::parse("N/A");
        assert!(number.is_defaulted());
        assert_eq!(
            number,
            Coerced::Defaulted {
                raw: "N/A".to_string()
            }
        );
        assert_eq!(number.into_value(), 0);

        let padded: Coerced<i32> = Coerced::parse(" 7");
        assert_eq!(padded.into_value(), 0);
    }

    #[test]
    fn strict_mode_rejects_coercions_and_drops() {
        let mut report = LoadReport::new();
        assert!(report.enforce_strict().is_ok());

        report.record_coercion(2, "Chris Paul", "number", "N/A");
        let err = report.enforce_strict().unwrap_err();
        assert!(matches!(err, LoaderError::Strict(_)));

        let mut report = LoadReport::new();
        report.record_drop(1, "Someone", "Seattle Sonics", DropReason::NoTeamNamed("Sonics".to_string()));
        assert!(report.enforce_strict().is_err());
        assert!(!report.is_clean());
    }

    #[test]
    fn ambiguity_alone_passes_strict_mode() {
        let mut report = LoadReport::new();
        report.record_ambiguous(1, "Someone", "Heat", vec!["MIA".to_string(), "MHT".to_string()]);
        assert!(report.enforce_strict().is_ok());
        assert!(!report.is_clean());
    }
}
