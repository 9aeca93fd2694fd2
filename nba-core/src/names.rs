//! Team name handling
//!
//! Splitting "City Name" strings, the optional alias table and the lookup
//! used to join roster rows to loaded teams.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{LoaderError, Result};
use crate::models::Team;
use crate::report::DropReason;

/// Split "Oklahoma City Thunder" into ("Oklahoma City", "Thunder").
///
/// Only two and three word values are supported; the last word is the
/// short name and everything before it is the city.
pub fn split_city_and_name(value: &str, row: u64) -> Result<(String, String)> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [city, name] => Ok((city.to_string(), name.to_string())),
        [first, second, name] => Ok((format!("{} {}", first, second), name.to_string())),
        _ => Err(LoaderError::TeamName {
            row,
            value: value.to_string(),
        }),
    }
}

/// Short name token of a roster team field: the third word of a three word
/// value, the second word otherwise.
pub fn short_name_token(value: &str, row: u64) -> Result<&str> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let idx = if tokens.len() == 3 { 2 } else { 1 };
    tokens.get(idx).copied().ok_or_else(|| LoaderError::TeamName {
        row,
        value: value.to_string(),
    })
}

fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Roster team field -> team abbreviation, read from YAML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let table: AliasTable = serde_yaml::from_str(yaml)?;
        Ok(table.normalized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            LoaderError::Config(format!("Cannot read aliases file {}: {}", path.display(), err))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn insert(&mut self, team_field: &str, abbreviation: &str) {
        self.aliases
            .insert(normalize(team_field), abbreviation.trim().to_uppercase());
    }

    pub fn abbreviation_for(&self, team_field: &str) -> Option<&str> {
        self.aliases.get(&normalize(team_field)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn normalized(self) -> Self {
        let mut table = AliasTable::new();
        for (team_field, abbreviation) in &self.aliases {
            table.insert(team_field, abbreviation);
        }
        table
    }
}

/// Result of resolving a roster team field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Indices into the team list, in team order
    Matched { key: String, indices: Vec<usize> },
    Unmatched(DropReason),
}

/// Positions of loaded teams by abbreviation, full name and short name
#[derive(Debug, Default)]
pub struct TeamIndex {
    by_abbreviation: HashMap<String, Vec<usize>>,
    by_full_name: HashMap<String, Vec<usize>>,
    by_name: HashMap<String, Vec<usize>>,
}

impl TeamIndex {
    pub fn build(teams: &[Team]) -> Self {
        let mut index = TeamIndex::default();
        for (i, team) in teams.iter().enumerate() {
            index
                .by_abbreviation
                .entry(team.abbreviation.trim().to_string())
                .or_default()
                .push(i);
            index
                .by_full_name
                .entry(normalize(&team.full_name()))
                .or_default()
                .push(i);
            index.by_name.entry(team.name.clone()).or_default().push(i);
        }
        index
    }

    /// Alias table first, then the exact "City Name", then the short name token
    pub fn resolve(&self, aliases: &AliasTable, team_field: &str, row: u64) -> Result<Resolution> {
        if let Some(abbreviation) = aliases.abbreviation_for(team_field) {
            debug!("Row {}: alias '{}' -> {}", row, team_field, abbreviation);
            return Ok(match self.by_abbreviation.get(abbreviation) {
                Some(indices) => Resolution::Matched {
                    key: abbreviation.to_string(),
                    indices: indices.clone(),
                },
                None => Resolution::Unmatched(DropReason::UnknownAlias(abbreviation.to_string())),
            });
        }

        let full_name = normalize(team_field);
        if let Some(indices) = self.by_full_name.get(&full_name) {
            return Ok(Resolution::Matched {
                key: full_name,
                indices: indices.clone(),
            });
        }

        let token = short_name_token(team_field, row)?;
        Ok(match self.by_name.get(token) {
            Some(indices) => Resolution::Matched {
                key: token.to_string(),
                indices: indices.clone(),
            },
            None => Resolution::Unmatched(DropReason::NoTeamNamed(token.to_string())),
        })
    }
}
