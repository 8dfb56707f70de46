use std::collections::{BTreeMap, BTreeSet};

use super::win_rate::win_rate;
use crate::domain::MatchRecord;

/// Wins and losses over decided matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins, self.losses)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub player: String,
    pub wins: u32,
    pub losses: u32,
    pub heroes_used: BTreeSet<String>,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroStat {
    pub hero: String,
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    pub win_rate: f64,
    /// Opponent hero → record of this hero against it
    pub matchups: BTreeMap<String, WinLoss>,
}

/// One directed (hero, opponent) pairing with at least one decided match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupStat {
    pub hero: String,
    pub opponent_hero: String,
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
    Undecided,
}

impl MatchResult {
    pub fn as_str(&self) -> &str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Loss => "Loss",
            MatchResult::Undecided => "Undecided",
        }
    }
}

/// One match seen from one participant's side
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub player: String,
    pub hero: String,
    pub round: String,
    pub opponent: String,
    pub opponent_hero: String,
    pub result: MatchResult,
}

/// Everything derived from one match sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentStats {
    pub player_stats: Vec<PlayerStat>,
    pub hero_stats: Vec<HeroStat>,
    pub matchup_stats: Vec<MatchupStat>,
    pub match_table: Vec<MatchRecord>,
    pub player_details: Vec<PlayerDetail>,
}

impl TournamentStats {
    pub fn is_empty(&self) -> bool {
        self.match_table.is_empty()
    }

    pub fn decided_matches(&self) -> usize {
        self.match_table.iter().filter(|m| m.is_decided()).count()
    }

    pub fn player(&self, name: &str) -> Option<&PlayerStat> {
        self.player_stats.iter().find(|p| p.player == name)
    }

    pub fn hero(&self, hero: &str) -> Option<&HeroStat> {
        self.hero_stats.iter().find(|h| h.hero == hero)
    }

    pub fn matchup(&self, hero: &str, opponent_hero: &str) -> Option<&MatchupStat> {
        self.matchup_stats
            .iter()
            .find(|m| m.hero == hero && m.opponent_hero == opponent_hero)
    }
}
