//! Teams file loading
//!
//! Each row is `[CityAndName, Abbreviation]`, for example
//! `Oklahoma City Thunder,okc`.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use tracing::{debug, info};

use crate::constants::{TEAMS, TEAM_FIELDS};
use crate::csv_source::{csv_reader, open_csv, require_fields};
use crate::error::Result;
use crate::models::Team;
use crate::names::split_city_and_name;

/// Team Loader - turns the teams file into team records with empty rosters
pub struct TeamLoader;

impl TeamLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<Team>> {
        let path = path.as_ref();
        info!("Reading teams from: {}", path.display());
        let teams = self.read(open_csv(path, TEAMS)?)?;
        info!("Loaded {} teams", teams.len());
        Ok(teams)
    }

    pub fn load_reader<R: Read>(&self, source: R) -> Result<Vec<Team>> {
        self.read(csv_reader(source))
    }

    fn read<R: Read>(&self, mut reader: Reader<R>) -> Result<Vec<Team>> {
        let mut teams = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let row = i as u64 + 1;
            let record = record?;
            require_fields(&record, TEAM_FIELDS, TEAMS, row)?;

            let (city, name) = split_city_and_name(&record[0], row)?;
            let team = Team::new(name, city, &record[1]);
            debug!("Team {}: {} ({})", row, team.full_name(), team.abbreviation);
            teams.push(team);
        }
        Ok(teams)
    }
}

impl Default for TeamLoader {
    fn default() -> Self {
        Self::new()
    }
}
