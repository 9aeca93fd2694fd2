//! Rosters file loading and the player/team join
//!
//! Each row is `[Position, Name, Number, Height, Weight, Birthdate, Team]`,
//! for example `PG,Chris Paul,3,6'0",175,1985-05-06,Oklahoma City Thunder`.

use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};
use tracing::{debug, info};

use crate::constants::*;
use crate::csv_source::{csv_reader, open_csv, require_fields};
use crate::error::{LoaderError, Result};
use crate::models::{Player, Team};
use crate::names::{AliasTable, Resolution, TeamIndex};
use crate::report::{Coerced, LoadReport};

/// Drop the trailing unit character: `6'10"` becomes `6'10`.
pub fn strip_height_unit(raw: &str) -> Option<&str> {
    let mut chars = raw.chars();
    chars.next_back()?;
    Some(chars.as_str())
}

/// Roster Loader - builds players and appends them to the matching teams
pub struct RosterLoader {
    aliases: AliasTable,
}

impl RosterLoader {
    pub fn new() -> Self {
        Self {
            aliases: AliasTable::new(),
        }
    }

    pub fn with_aliases(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Read the rosters file at `path` and join its players into `teams`
    pub fn join_path(&self, path: impl AsRef<Path>, teams: &mut [Team]) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Reading rosters from: {}", path.display());
        let report = self.join(open_csv(path, ROSTERS)?, teams)?;
        report.log_summary();
        Ok(report)
    }

    pub fn join_reader<R: Read>(&self, source: R, teams: &mut [Team]) -> Result<LoadReport> {
        self.join(csv_reader(source), teams)
    }

    fn join<R: Read>(&self, mut reader: Reader<R>, teams: &mut [Team]) -> Result<LoadReport> {
        let index = TeamIndex::build(teams);
        let mut report = LoadReport::new();
        report.teams = teams.len();

        for (i, record) in reader.records().enumerate() {
            let row = i as u64 + 1;
            let record = record?;
            require_fields(&record, ROSTER_FIELDS, ROSTERS, row)?;
            report.roster_rows = row;

            let player = self.parse_player(&record, row, &mut report)?;
            let team_field = &record[COL_TEAM];

            match index.resolve(&self.aliases, team_field, row)? {
                Resolution::Matched { key, indices } => {
                    if indices.len() > 1 {
                        let matches = indices.iter().map(|&t| teams[t].abbreviation.clone()).collect();
                        report.record_ambiguous(row, &player.name, &key, matches);
                    }
                    for &t in &indices {
                        debug!("Row {}: {} -> {}", row, player.name, teams[t].full_name());
                        teams[t].players.push(player.clone());
                    }
                    report.joined += indices.len();
                }
                Resolution::Unmatched(reason) => {
                    report.record_drop(row, &player.name, team_field, reason);
                }
            }
        }

        Ok(report)
    }

    fn parse_player(&self, record: &StringRecord, row: u64, report: &mut LoadReport) -> Result<Player> {
        let name = &record[COL_NAME];

        let number = Coerced::<i64>::parse(&record[COL_NUMBER]);
        if number.is_defaulted() {
            report.record_coercion(row, name, NUMBER, &record[COL_NUMBER]);
        }
        let weight = Coerced::<i64>::parse(&record[COL_WEIGHT]);
        if weight.is_defaulted() {
            report.record_coercion(row, name, WEIGHT, &record[COL_WEIGHT]);
        }

        let height = strip_height_unit(&record[COL_HEIGHT]).ok_or_else(|| LoaderError::Row {
            file: ROSTERS.to_string(),
            row,
            message: "empty height".to_string(),
        })?;

        Ok(Player {
            name: name.to_string(),
            number: number.into_value(),
            position: record[COL_POSITION].to_string(),
            height: height.to_string(),
            weight: weight.into_value(),
            birthdate: record[COL_BIRTHDATE].to_string(),
        })
    }
}

impl Default for RosterLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DropReason;

    fn league() -> Vec<Team> {
        vec![
            Team::new("Thunder", "Oklahoma City", "OKC"),
            Team::new("Heat", "Miami", "MIA"),
        ]
    }

    #[test]
    fn strips_the_last_character_of_height() {
        assert_eq!(strip_height_unit("6'10\""), Some("6'10"));
        assert_eq!(strip_height_unit("6'0\""), Some("6'0"));
        assert_eq!(strip_height_unit("2.06m"), Some("2.06"));
        assert_eq!(strip_height_unit("\u{2033}"), Some(""));
        assert_eq!(strip_height_unit(""), None);
    }

    #[test]
    fn joins_player_to_team_by_short_name() {
        let mut teams = league();
        let csv = "PG,Chris Paul,3,\"6'0\"\"\",175,1985-05-06,Oklahoma City Thunder\n";
        let report = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();

        assert_eq!(report.joined, 1);
        assert!(report.is_clean());
        assert_eq!(
            teams[0].players,
            vec![Player {
                name: "Chris Paul".to_string(),
                number: 3,
                position: "PG".to_string(),
                height: "6'0".to_string(),
                weight: 175,
                birthdate: "1985-05-06".to_string(),
            }]
        );
        assert!(teams[1].players.is_empty());
    }

    #[test]
    fn unmatched_player_is_dropped_and_reported() {
        let mut teams = league();
        let csv = "C,Shawn Kemp,40,6'10\",230,1969-11-26,Seattle SuperSonics\n";
        let report = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.players.is_empty()));
        assert_eq!(report.joined, 0);
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].row, 1);
        assert_eq!(
            report.dropped[0].reason,
            DropReason::NoTeamNamed("SuperSonics".to_string())
        );
    }

    #[test]
    fn non_numeric_number_and_weight_become_zero() {
        let mut teams = league();
        let csv = "G,Jimmy Butler,N/A,6'7\",,1989-09-14,Miami Heat\n";
        let report = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();

        let player = &teams[1].players[0];
        assert_eq!(player.number, 0);
        assert_eq!(player.weight, 0);
        assert_eq!(report.coercions.len(), 2);
        assert_eq!(report.coercions[0].field, NUMBER);
        assert_eq!(report.coercions[0].raw, "N/A");
        assert_eq!(report.coercions[1].field, WEIGHT);
    }

    #[test]
    fn numbers_beyond_32_bits_are_kept() {
        let mut teams = league();
        let csv = "G,Big Number,3000000000,6'5\",195,2000-01-20,Miami Heat\n";
        let report = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();
        assert_eq!(teams[1].players[0].number, 3_000_000_000);
        assert!(report.coercions.is_empty());
    }

    #[test]
    fn player_order_follows_roster_rows() {
        let mut teams = league();
        let csv = "\
G,Tyler Herro,14,6'5\",195,2000-01-20,Miami Heat
PG,Chris Paul,3,6'0\",175,1985-05-06,Oklahoma City Thunder
C,Bam Adebayo,13,6'9\",255,1997-07-18,Miami Heat
";
        RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();
        let heat: Vec<&str> = teams[1].players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(heat, vec!["Tyler Herro", "Bam Adebayo"]);
        assert_eq!(teams[0].players.len(), 1);
    }

    #[test]
    fn duplicate_short_names_receive_the_player_and_are_flagged() {
        let mut teams = league();
        teams.push(Team::new("Heat", "Springfield", "SPH"));
        let csv = "G,Somebody,1,6'1\",180,1990-01-01,Beach City Heat\n";
        let report = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap();

        assert_eq!(teams[1].players.len(), 1);
        assert_eq!(teams[2].players.len(), 1);
        assert_eq!(report.joined, 2);
        assert_eq!(report.ambiguous.len(), 1);
        assert_eq!(report.ambiguous[0].matches, vec!["MIA", "SPH"]);
    }

    #[test]
    fn alias_table_overrides_token_matching() {
        let mut teams = league();
        let aliases = AliasTable::from_yaml_str("\"OKC Heat\": OKC\n").unwrap();
        let csv = "PG,Chris Paul,3,6'0\",175,1985-05-06,OKC Heat\n";
        RosterLoader::with_aliases(aliases)
            .join_reader(csv.as_bytes(), &mut teams)
            .unwrap();
        assert_eq!(teams[0].players.len(), 1);
        assert!(teams[1].players.is_empty());
    }

    #[test]
    fn alias_joins_team_loaded_with_spaced_abbreviation() {
        let mut teams = crate::teams::TeamLoader::new()
            .load_reader("Oklahoma City Thunder, OKC\n".as_bytes())
            .unwrap();
        let aliases = AliasTable::from_yaml_str("Thunder OKC: OKC\n").unwrap();
        let csv = "PG,Chris Paul,3,6'0\",175,1985-05-06,Thunder OKC\n";
        let report = RosterLoader::with_aliases(aliases)
            .join_reader(csv.as_bytes(), &mut teams)
            .unwrap();

        assert_eq!(teams[0].abbreviation, " OKC");
        assert_eq!(teams[0].players.len(), 1);
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn one_word_team_field_is_fatal() {
        let mut teams = league();
        let csv = "PG,Chris Paul,3,6'0\",175,1985-05-06,Thunder\n";
        let err = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap_err();
        assert!(matches!(err, LoaderError::TeamName { row: 1, .. }));
    }

    #[test]
    fn empty_height_is_a_malformed_row() {
        let mut teams = league();
        let csv = "PG,Chris Paul,3,,175,1985-05-06,Oklahoma City Thunder\n";
        let err = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap_err();
        assert!(matches!(err, LoaderError::Row { row: 1, .. }));
    }

    #[test]
    fn short_row_is_fatal() {
        let mut teams = league();
        let csv = "PG,Chris Paul,3\n";
        let err = RosterLoader::new().join_reader(csv.as_bytes(), &mut teams).unwrap_err();
        assert!(matches!(err, LoaderError::Row { row: 1, .. }));
    }
}
