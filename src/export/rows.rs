use serde::Serialize;

use crate::analysis::PolarizedMatchup;
use crate::domain::MatchRecord;
use crate::stats::{HeroStat, MatchupStat, PlayerDetail, PlayerStat};

pub const TOURNAMENT_HEADER: &str = "Tournament";

/// A flat output row with a fixed column layout
pub trait TableRow: Serialize {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn rate_cell(win_rate: f64) -> String {
    format!("{:.2}", win_rate)
}

/// Row of the match results table
#[derive(Debug, Serialize)]
pub struct MatchResultRow<'a> {
    #[serde(rename = "Round")]
    pub round: &'a str,
    #[serde(rename = "Player 1 Name")]
    pub player1_name: &'a str,
    #[serde(rename = "Player 1 Hero")]
    pub player1_hero: &'a str,
    #[serde(rename = "Player 2 Name")]
    pub player2_name: &'a str,
    #[serde(rename = "Player 2 Hero")]
    pub player2_hero: &'a str,
    #[serde(rename = "Winner")]
    pub winner: Option<&'a str>,
    #[serde(rename = "Winning Hero")]
    pub winning_hero: Option<&'a str>,
}

impl<'a> From<&'a MatchRecord> for MatchResultRow<'a> {
    fn from(record: &'a MatchRecord) -> Self {
        Self {
            round: record.round_label(),
            player1_name: record.player1_name(),
            player1_hero: record.player1_hero(),
            player2_name: record.player2_name(),
            player2_hero: record.player2_hero(),
            winner: record.winner(),
            winning_hero: record.winning_hero(),
        }
    }
}

impl TableRow for MatchResultRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Round",
        "Player 1 Name",
        "Player 1 Hero",
        "Player 2 Name",
        "Player 2 Hero",
        "Winner",
        "Winning Hero",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.round.to_string(),
            self.player1_name.to_string(),
            self.player1_hero.to_string(),
            self.player2_name.to_string(),
            self.player2_hero.to_string(),
            self.winner.unwrap_or_default().to_string(),
            self.winning_hero.unwrap_or_default().to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerStatRow<'a> {
    #[serde(rename = "Player")]
    pub player: &'a str,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Win Rate (%)")]
    pub win_rate: f64,
    #[serde(rename = "Heroes Used")]
    pub heroes_used: String,
}

impl<'a> From<&'a PlayerStat> for PlayerStatRow<'a> {
    fn from(stat: &'a PlayerStat) -> Self {
        Self {
            player: &stat.player,
            wins: stat.wins,
            losses: stat.losses,
            win_rate: stat.win_rate,
            heroes_used: stat
                .heroes_used
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl TableRow for PlayerStatRow<'_> {
    const HEADERS: &'static [&'static str] =
        &["Player", "Wins", "Losses", "Win Rate (%)", "Heroes Used"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            rate_cell(self.win_rate),
            self.heroes_used.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct HeroStatRow<'a> {
    #[serde(rename = "Hero")]
    pub hero: &'a str,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Total Matches")]
    pub total_matches: u32,
    #[serde(rename = "Win Rate (%)")]
    pub win_rate: f64,
}

impl<'a> From<&'a HeroStat> for HeroStatRow<'a> {
    fn from(stat: &'a HeroStat) -> Self {
        Self {
            hero: &stat.hero,
            wins: stat.wins,
            losses: stat.losses,
            total_matches: stat.total_matches,
            win_rate: stat.win_rate,
        }
    }
}

impl TableRow for HeroStatRow<'_> {
    const HEADERS: &'static [&'static str] =
        &["Hero", "Wins", "Losses", "Total Matches", "Win Rate (%)"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.hero.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.total_matches.to_string(),
            rate_cell(self.win_rate),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct MatchupRow<'a> {
    #[serde(rename = "Hero")]
    pub hero: &'a str,
    #[serde(rename = "Opponent Hero")]
    pub opponent_hero: &'a str,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Total Matches")]
    pub total_matches: u32,
    #[serde(rename = "Win Rate (%)")]
    pub win_rate: f64,
}

impl<'a> From<&'a MatchupStat> for MatchupRow<'a> {
    fn from(stat: &'a MatchupStat) -> Self {
        Self {
            hero: &stat.hero,
            opponent_hero: &stat.opponent_hero,
            wins: stat.wins,
            losses: stat.losses,
            total_matches: stat.total_matches,
            win_rate: stat.win_rate,
        }
    }
}

impl TableRow for MatchupRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Hero",
        "Opponent Hero",
        "Wins",
        "Losses",
        "Total Matches",
        "Win Rate (%)",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.hero.to_string(),
            self.opponent_hero.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.total_matches.to_string(),
            rate_cell(self.win_rate),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerDetailRow<'a> {
    #[serde(rename = "Player")]
    pub player: &'a str,
    #[serde(rename = "Hero")]
    pub hero: &'a str,
    #[serde(rename = "Round")]
    pub round: &'a str,
    #[serde(rename = "Opponent")]
    pub opponent: &'a str,
    #[serde(rename = "Opponent Hero")]
    pub opponent_hero: &'a str,
    #[serde(rename = "Result")]
    pub result: &'a str,
}

impl<'a> From<&'a PlayerDetail> for PlayerDetailRow<'a> {
    fn from(detail: &'a PlayerDetail) -> Self {
        Self {
            player: &detail.player,
            hero: &detail.hero,
            round: &detail.round,
            opponent: &detail.opponent,
            opponent_hero: &detail.opponent_hero,
            result: detail.result.as_str(),
        }
    }
}

impl TableRow for PlayerDetailRow<'_> {
    const HEADERS: &'static [&'static str] =
        &["Player", "Hero", "Round", "Opponent", "Opponent Hero", "Result"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player.to_string(),
            self.hero.to_string(),
            self.round.to_string(),
            self.opponent.to_string(),
            self.opponent_hero.to_string(),
            self.result.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct PolarizedRow<'a> {
    #[serde(flatten)]
    pub matchup: MatchupRow<'a>,
    #[serde(rename = "Deviation")]
    pub deviation: f64,
}

impl<'a> From<&'a PolarizedMatchup> for PolarizedRow<'a> {
    fn from(polarized: &'a PolarizedMatchup) -> Self {
        Self {
            matchup: MatchupRow::from(&polarized.matchup),
            deviation: polarized.deviation,
        }
    }
}

impl TableRow for PolarizedRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Hero",
        "Opponent Hero",
        "Wins",
        "Losses",
        "Total Matches",
        "Win Rate (%)",
        "Deviation",
    ];

    fn cells(&self) -> Vec<String> {
        let mut cells = self.matchup.cells();
        cells.push(rate_cell(self.deviation));
        cells
    }
}

/// A row prefixed with the label of the tournament it came from
#[derive(Debug, Serialize)]
pub struct TaggedRow<'a, R> {
    #[serde(rename = "Tournament")]
    pub tournament: &'a str,
    #[serde(flatten)]
    pub row: R,
}

impl<'a, R> TaggedRow<'a, R> {
    pub fn new(tournament: &'a str, row: R) -> Self {
        Self { tournament, row }
    }
}
