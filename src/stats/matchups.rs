use super::types::{HeroStat, MatchupStat};

/// Flatten each hero's nested matchup map into one row per (hero, opponent) pair.
///
/// Pairs without a decided meeting are omitted rather than zero-filled.
pub fn flatten_matchups(hero_stats: &[HeroStat]) -> Vec<MatchupStat> {
    hero_stats
        .iter()
        .flat_map(|hero| {
            hero.matchups
                .iter()
                .filter(|(_, record)| record.total() > 0)
                .map(move |(opponent, record)| MatchupStat {
                    hero: hero.hero.clone(),
                    opponent_hero: opponent.clone(),
                    wins: record.wins,
                    losses: record.losses,
                    total_matches: record.total(),
                    win_rate: record.win_rate(),
                })
        })
        .collect()
}
