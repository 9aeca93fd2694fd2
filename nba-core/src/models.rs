//! Team and player records
//!
//! These are stored as-is in MongoDB, one document per team with the roster
//! nested inside it.

use serde::{Deserialize, Serialize};

/// Team document - one per row of the teams file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Short name used as the join key, e.g. "Thunder"
    pub name: String,
    /// One or two words, e.g. "Oklahoma City"
    pub city: String,
    /// Always uppercase
    pub abbreviation: String,
    #[serde(rename = "playerlist", default)]
    pub players: Vec<Player>,
}

/// Player sub-document - one per row of the rosters file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub number: i64,
    pub position: String,
    /// Height with the unit character stripped, e.g. "6'10"
    pub height: String,
    pub weight: i64,
    pub birthdate: String,
}

impl Team {
    pub fn new(name: impl Into<String>, city: impl Into<String>, abbreviation: &str) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            abbreviation: abbreviation.to_uppercase(),
            players: Vec::new(),
        }
    }

    /// City and short name as they appear in the input files
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}
