use std::collections::{BTreeMap, BTreeSet};

use super::matchups::flatten_matchups;
use super::types::{
    HeroStat, MatchResult, PlayerDetail, PlayerStat, TournamentStats, WinLoss,
};
use crate::domain::{MatchRecord, Outcome, Side};

#[derive(Default)]
struct PlayerTally {
    record: WinLoss,
    heroes_used: BTreeSet<String>,
}

#[derive(Default)]
struct HeroTally {
    record: WinLoss,
    matchups: BTreeMap<String, WinLoss>,
}

/// Accumulator state owned by a single aggregation pass
#[derive(Default)]
struct Accumulator {
    players: BTreeMap<String, PlayerTally>,
    heroes: BTreeMap<String, HeroTally>,
    details: Vec<PlayerDetail>,
}

/// Fold a match sequence into player, hero and matchup tables.
///
/// Undecided matches register players and heroes but move no counters. Output
/// tables are keyed in sorted order so the same input always gives the same output.
pub fn aggregate(matches: &[MatchRecord]) -> TournamentStats {
    let mut acc = Accumulator::default();

    for record in matches {
        acc.record_match(record);
    }

    acc.finish(matches.to_vec())
}

impl Accumulator {
    fn record_match(&mut self, record: &MatchRecord) {
        self.register_participants(record);
        self.record_details(record);

        if let Some(outcome) = record.outcome() {
            self.record_outcome(&outcome);
        }
    }

    fn register_participants(&mut self, record: &MatchRecord) {
        self.player_entry(record.player1_name())
            .heroes_used
            .insert(record.player1_hero().to_string());
        self.player_entry(record.player2_name())
            .heroes_used
            .insert(record.player2_hero().to_string());

        self.hero_entry(record.player1_hero());
        self.hero_entry(record.player2_hero());
    }

    fn record_outcome(&mut self, outcome: &Outcome<'_>) {
        self.player_entry(outcome.winner).record.wins += 1;
        self.player_entry(outcome.loser).record.losses += 1;

        let winning = self.hero_entry(outcome.winning_hero);
        winning.record.wins += 1;
        matchup_entry(winning, outcome.losing_hero).wins += 1;

        let losing = self.hero_entry(outcome.losing_hero);
        losing.record.losses += 1;
        matchup_entry(losing, outcome.winning_hero).losses += 1;
    }

    fn record_details(&mut self, record: &MatchRecord) {
        self.details.push(detail_for(record, Side::Player1));
        self.details.push(detail_for(record, Side::Player2));
    }

    fn player_entry(&mut self, name: &str) -> &mut PlayerTally {
        self.players.entry(name.to_string()).or_default()
    }

    fn hero_entry(&mut self, hero: &str) -> &mut HeroTally {
        self.heroes.entry(hero.to_string()).or_default()
    }

    fn finish(self, match_table: Vec<MatchRecord>) -> TournamentStats {
        let player_stats = build_player_stats(self.players);
        let hero_stats = build_hero_stats(self.heroes);
        let matchup_stats = flatten_matchups(&hero_stats);

        TournamentStats {
            player_stats,
            hero_stats,
            matchup_stats,
            match_table,
            player_details: self.details,
        }
    }
}

fn matchup_entry<'a>(hero: &'a mut HeroTally, opponent: &str) -> &'a mut WinLoss {
    hero.matchups.entry(opponent.to_string()).or_default()
}

fn detail_for(record: &MatchRecord, side: Side) -> PlayerDetail {
    let (player, hero, opponent, opponent_hero) = match side {
        Side::Player1 => (
            record.player1_name(),
            record.player1_hero(),
            record.player2_name(),
            record.player2_hero(),
        ),
        Side::Player2 => (
            record.player2_name(),
            record.player2_hero(),
            record.player1_name(),
            record.player1_hero(),
        ),
    };

    let result = match record.winner_side() {
        Some(winner) if winner == side => MatchResult::Win,
        Some(_) => MatchResult::Loss,
        None => MatchResult::Undecided,
    };

    PlayerDetail {
        player: player.to_string(),
        hero: hero.to_string(),
        round: record.round_label().to_string(),
        opponent: opponent.to_string(),
        opponent_hero: opponent_hero.to_string(),
        result,
    }
}

fn build_player_stats(players: BTreeMap<String, PlayerTally>) -> Vec<PlayerStat> {
    players
        .into_iter()
        .map(|(player, tally)| PlayerStat {
            player,
            wins: tally.record.wins,
            losses: tally.record.losses,
            win_rate: tally.record.win_rate(),
            heroes_used: tally.heroes_used,
        })
        .collect()
}

fn build_hero_stats(heroes: BTreeMap<String, HeroTally>) -> Vec<HeroStat> {
    heroes
        .into_iter()
        .map(|(hero, tally)| HeroStat {
            hero,
            wins: tally.record.wins,
            losses: tally.record.losses,
            total_matches: tally.record.total(),
            win_rate: tally.record.win_rate(),
            matchups: tally.matchups,
        })
        .collect()
}
