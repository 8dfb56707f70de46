use serde::{Deserialize, Serialize};

/// Which side of a pairing a participant was listed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

// --- Raw Page Structures ---

/// One participant cell as scraped from a results row, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParticipant {
    pub name: Option<String>,
    pub hero: Option<String>,
    #[serde(default)]
    pub is_winner: bool,
}

impl RawParticipant {
    pub fn new(name: &str, hero: &str, is_winner: bool) -> Self {
        Self {
            name: Some(name.to_string()),
            hero: Some(hero.to_string()),
            is_winner,
        }
    }
}

/// One results row as scraped from a coverage round page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub participants: Vec<RawParticipant>,
}

impl RawRow {
    pub fn new(participants: Vec<RawParticipant>) -> Self {
        Self { participants }
    }

    /// Row with two participants; `winner` marks which one carries the winner marker
    pub fn pairing(
        player1: (&str, &str),
        player2: (&str, &str),
        winner: Option<Side>,
    ) -> Self {
        Self::new(vec![
            RawParticipant::new(player1.0, player1.1, winner == Some(Side::Player1)),
            RawParticipant::new(player2.0, player2.1, winner == Some(Side::Player2)),
        ])
    }
}

// --- Validated Match Records ---

/// One completed or contested game between two named participants.
///
/// Records are immutable once built. The winning hero is never stored; it is
/// always derived from the winning side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    round_label: String,
    player1_name: String,
    player1_hero: String,
    player2_name: String,
    player2_hero: String,
    winner: Option<Side>,
}

/// Winner/loser view of a decided match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub winner: &'a str,
    pub winning_hero: &'a str,
    pub loser: &'a str,
    pub losing_hero: &'a str,
}

impl MatchRecord {
    /// Build a record from `(name, hero)` pairs.
    ///
    /// Returns `None` when a name or hero is blank or both names are equal.
    pub fn try_new(
        round_label: impl Into<String>,
        player1: (&str, &str),
        player2: (&str, &str),
        winner: Option<Side>,
    ) -> Option<Self> {
        let (p1_name, p1_hero) = (player1.0.trim(), player1.1.trim());
        let (p2_name, p2_hero) = (player2.0.trim(), player2.1.trim());

        if [p1_name, p1_hero, p2_name, p2_hero].iter().any(|s| s.is_empty()) {
            return None;
        }
        if p1_name == p2_name {
            return None;
        }

        Some(Self {
            round_label: round_label.into(),
            player1_name: p1_name.to_string(),
            player1_hero: p1_hero.to_string(),
            player2_name: p2_name.to_string(),
            player2_hero: p2_hero.to_string(),
            winner,
        })
    }

    pub fn round_label(&self) -> &str {
        &self.round_label
    }

    pub fn player1_name(&self) -> &str {
        &self.player1_name
    }

    pub fn player1_hero(&self) -> &str {
        &self.player1_hero
    }

    pub fn player2_name(&self) -> &str {
        &self.player2_name
    }

    pub fn player2_hero(&self) -> &str {
        &self.player2_hero
    }

    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|side| self.name_of(side))
    }

    pub fn winning_hero(&self) -> Option<&str> {
        self.winner.map(|side| self.hero_of(side))
    }

    pub fn outcome(&self) -> Option<Outcome<'_>> {
        let winner = self.winner?;
        let loser = opposite(winner);

        Some(Outcome {
            winner: self.name_of(winner),
            winning_hero: self.hero_of(winner),
            loser: self.name_of(loser),
            losing_hero: self.hero_of(loser),
        })
    }

    fn name_of(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1_name,
            Side::Player2 => &self.player2_name,
        }
    }

    fn hero_of(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1_hero,
            Side::Player2 => &self.player2_hero,
        }
    }
}

fn opposite(side: Side) -> Side {
    match side {
        Side::Player1 => Side::Player2,
        Side::Player2 => Side::Player1,
    }
}

/// Label used for matches scraped from a given round number
pub fn round_label(round: u32) -> String {
    format!("Round {}", round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_hero_follows_winner() {
        let record = MatchRecord::try_new(
            "Round 1",
            ("Alice", "Dorinthea"),
            ("Bob", "Katsu"),
            Some(Side::Player2),
        )
        .unwrap();

        assert_eq!(record.winner(), Some("Bob"));
        assert_eq!(record.winning_hero(), Some("Katsu"));

        let outcome = record.outcome().unwrap();
        assert_eq!(outcome.loser, "Alice");
        assert_eq!(outcome.losing_hero, "Dorinthea");
    }

    #[test]
    fn test_undecided_match_has_no_winning_hero() {
        let record =
            MatchRecord::try_new("Round 2", ("Alice", "Dorinthea"), ("Bob", "Katsu"), None)
                .unwrap();

        assert!(!record.is_decided());
        assert_eq!(record.winner(), None);
        assert_eq!(record.winning_hero(), None);
        assert!(record.outcome().is_none());
    }

    #[test]
    fn test_rejects_blank_and_identical_names() {
        assert!(MatchRecord::try_new("Round 1", ("", "Dorinthea"), ("Bob", "Katsu"), None).is_none());
        assert!(MatchRecord::try_new("Round 1", ("Alice", "  "), ("Bob", "Katsu"), None).is_none());
        assert!(
            MatchRecord::try_new("Round 1", ("Alice", "Dorinthea"), ("Alice", "Katsu"), None)
                .is_none()
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let record =
            MatchRecord::try_new("Round 1", ("  Alice ", "Dorinthea\n"), ("Bob", "Katsu"), None)
                .unwrap();

        assert_eq!(record.player1_name(), "Alice");
        assert_eq!(record.player1_hero(), "Dorinthea");
    }
}
