use log::info;

use super::aggregator::aggregate;
use super::types::{HeroStat, MatchupStat, PlayerDetail, PlayerStat, TournamentStats};
use crate::domain::{MatchRecord, TournamentSet};
use crate::errors::CombineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// One aggregate over the concatenation of every tournament
    Merged,
    /// One aggregate per tournament, kept side by side
    Tagged,
}

/// Per-tournament aggregate under its label
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentBreakdown {
    pub label: String,
    pub stats: TournamentStats,
}

/// Side-by-side aggregates; nothing is summed across tournaments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedStats {
    pub tournaments: Vec<TournamentBreakdown>,
}

impl TaggedStats {
    pub fn get(&self, label: &str) -> Option<&TournamentStats> {
        self.tournaments
            .iter()
            .find(|t| t.label == label)
            .map(|t| &t.stats)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tournaments.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn match_rows(&self) -> impl Iterator<Item = (&str, &MatchRecord)> {
        self.tournaments
            .iter()
            .flat_map(|t| t.stats.match_table.iter().map(move |row| (t.label.as_str(), row)))
    }

    pub fn player_rows(&self) -> impl Iterator<Item = (&str, &PlayerStat)> {
        self.tournaments
            .iter()
            .flat_map(|t| t.stats.player_stats.iter().map(move |row| (t.label.as_str(), row)))
    }

    pub fn hero_rows(&self) -> impl Iterator<Item = (&str, &HeroStat)> {
        self.tournaments
            .iter()
            .flat_map(|t| t.stats.hero_stats.iter().map(move |row| (t.label.as_str(), row)))
    }

    pub fn matchup_rows(&self) -> impl Iterator<Item = (&str, &MatchupStat)> {
        self.tournaments
            .iter()
            .flat_map(|t| t.stats.matchup_stats.iter().map(move |row| (t.label.as_str(), row)))
    }

    pub fn detail_rows(&self) -> impl Iterator<Item = (&str, &PlayerDetail)> {
        self.tournaments
            .iter()
            .flat_map(|t| t.stats.player_details.iter().map(move |row| (t.label.as_str(), row)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombinedStats {
    Merged(TournamentStats),
    Tagged(TaggedStats),
}

/// Pair match sequences with labels and combine them in the requested mode
pub fn combine(
    sequences: Vec<Vec<MatchRecord>>,
    labels: Vec<String>,
    mode: CombineMode,
) -> Result<CombinedStats, CombineError> {
    let set = TournamentSet::from_parts(sequences, labels)?;

    Ok(match mode {
        CombineMode::Merged => CombinedStats::Merged(combine_merged(&set)),
        CombineMode::Tagged => CombinedStats::Tagged(combine_tagged(&set)),
    })
}

/// Aggregate the concatenation of all tournaments in set order
pub fn combine_merged(set: &TournamentSet) -> TournamentStats {
    let all_matches: Vec<MatchRecord> = set
        .iter()
        .flat_map(|t| t.matches.iter().cloned())
        .collect();

    info!(
        "Merging {} tournaments ({} matches)",
        set.len(),
        all_matches.len()
    );
    aggregate(&all_matches)
}

/// Aggregate every tournament on its own
pub fn combine_tagged(set: &TournamentSet) -> TaggedStats {
    let tournaments = set
        .iter()
        .map(|t| TournamentBreakdown {
            label: t.label.clone(),
            stats: aggregate(&t.matches),
        })
        .collect();

    TaggedStats { tournaments }
}
