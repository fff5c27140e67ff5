//! Static league table
//!
//! Bidirectional mapping between team abbreviations and full names, built
//! once at startup and validated for completeness. The configured league set
//! drives unknown-team filtering and ledger pre-seeding.

use crate::error::{RatingError, Result};
use crate::types::TeamAbbrev;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The set of teams a run recognizes, with both lookup directions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    by_abbrev: HashMap<TeamAbbrev, String>,
    by_name: HashMap<String, TeamAbbrev>,
}

/// MLB clubs, abbreviation first
const MLB_TEAMS: &[(&str, &str)] = &[
    ("ARI", "Arizona Diamondbacks"),
    ("ATL", "Atlanta Braves"),
    ("BAL", "Baltimore Orioles"),
    ("BOS", "Boston Red Sox"),
    ("CHW", "Chicago White Sox"),
    ("CHC", "Chicago Cubs"),
    ("CIN", "Cincinnati Reds"),
    ("CLE", "Cleveland Guardians"),
    ("COL", "Colorado Rockies"),
    ("DET", "Detroit Tigers"),
    ("HOU", "Houston Astros"),
    ("KCR", "Kansas City Royals"),
    ("LAA", "Los Angeles Angels"),
    ("LAD", "Los Angeles Dodgers"),
    ("MIA", "Miami Marlins"),
    ("MIL", "Milwaukee Brewers"),
    ("MIN", "Minnesota Twins"),
    ("NYY", "New York Yankees"),
    ("NYM", "New York Mets"),
    ("OAK", "Oakland Athletics"),
    ("PHI", "Philadelphia Phillies"),
    ("PIT", "Pittsburgh Pirates"),
    ("SDP", "San Diego Padres"),
    ("SFG", "San Francisco Giants"),
    ("SEA", "Seattle Mariners"),
    ("STL", "St. Louis Cardinals"),
    ("TBR", "Tampa Bay Rays"),
    ("TEX", "Texas Rangers"),
    ("TOR", "Toronto Blue Jays"),
    ("WSN", "Washington Nationals"),
];

impl League {
    /// Build a league from (abbreviation, full name) pairs
    ///
    /// Fails when either direction of the mapping would be ambiguous or an
    /// entry is empty, so an incomplete table is caught at startup rather
    /// than at the first provider call.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut by_abbrev = HashMap::new();
        let mut by_name = HashMap::new();

        for (abbrev, name) in pairs {
            let abbrev: String = abbrev.into();
            let name: String = name.into();

            if abbrev.is_empty() || name.is_empty() {
                return Err(RatingError::LeagueTableError {
                    message: "Empty team abbreviation or name".to_string(),
                }
                .into());
            }
            if by_abbrev.insert(abbrev.clone(), name.clone()).is_some() {
                return Err(RatingError::LeagueTableError {
                    message: format!("Duplicate team abbreviation: {}", abbrev),
                }
                .into());
            }
            if by_name.insert(name.clone(), abbrev).is_some() {
                return Err(RatingError::LeagueTableError {
                    message: format!("Duplicate team name: {}", name),
                }
                .into());
            }
        }

        if by_abbrev.is_empty() {
            return Err(RatingError::LeagueTableError {
                message: "League table has no teams".to_string(),
            }
            .into());
        }

        Ok(Self { by_abbrev, by_name })
    }

    /// The 30-club MLB table
    pub fn mlb() -> Self {
        // The static table satisfies from_pairs' invariants by inspection
        Self::from_pairs(MLB_TEAMS.iter().copied())
            .expect("built-in MLB league table is well-formed")
    }

    pub fn contains(&self, abbrev: &str) -> bool {
        self.by_abbrev.contains_key(abbrev)
    }

    pub fn full_name(&self, abbrev: &str) -> Option<&str> {
        self.by_abbrev.get(abbrev).map(String::as_str)
    }

    pub fn abbrev(&self, full_name: &str) -> Option<&str> {
        self.by_name.get(full_name).map(String::as_str)
    }

    pub fn team_count(&self) -> usize {
        self.by_abbrev.len()
    }

    /// All abbreviations, unordered
    pub fn abbrevs(&self) -> impl Iterator<Item = &str> {
        self.by_abbrev.keys().map(String::as_str)
    }
}
