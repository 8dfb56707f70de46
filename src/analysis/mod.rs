use clap::ValueEnum;
use std::cmp::Ordering;

use crate::config::AnalysisSettings;
use crate::stats::{HeroStat, MatchupStat, TaggedStats};

/// A matchup far enough from an even split to be called lopsided
#[derive(Debug, Clone, PartialEq)]
pub struct PolarizedMatchup {
    pub matchup: MatchupStat,
    /// Distance of the win rate from 50%
    pub deviation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeroMetric {
    Wins,
    WinRate,
    TotalMatches,
}

impl HeroMetric {
    fn value(&self, hero: &HeroStat) -> f64 {
        match self {
            HeroMetric::Wins => f64::from(hero.wins),
            HeroMetric::WinRate => hero.win_rate,
            HeroMetric::TotalMatches => f64::from(hero.total_matches),
        }
    }
}

/// Top heroes of one tournament under a metric
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentLeaders<'a> {
    pub label: &'a str,
    pub heroes: Vec<&'a HeroStat>,
}

/// Heroes ordered by win rate, highest first; ties go to the hero with more matches
pub fn rank_heroes(heroes: &[HeroStat]) -> Vec<&HeroStat> {
    let mut ranked: Vec<&HeroStat> = heroes.iter().collect();
    ranked.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then_with(|| b.total_matches.cmp(&a.total_matches))
            .then_with(|| a.hero.cmp(&b.hero))
    });
    ranked
}

/// Matchups with a win rate at or beyond `threshold` (or its mirror below 50),
/// most lopsided first
pub fn polarized_matchups(
    matchups: &[MatchupStat],
    settings: &AnalysisSettings,
) -> Vec<PolarizedMatchup> {
    let upper = settings.polarized_threshold;
    let lower = 100.0 - settings.polarized_threshold;

    let mut polarized: Vec<PolarizedMatchup> = matchups
        .iter()
        .filter(|m| m.total_matches >= settings.min_matches)
        .filter(|m| m.win_rate >= upper || m.win_rate <= lower)
        .map(|m| PolarizedMatchup {
            matchup: m.clone(),
            deviation: (m.win_rate - 50.0).abs(),
        })
        .collect();

    polarized.sort_by(|a, b| {
        b.deviation
            .total_cmp(&a.deviation)
            .then_with(|| b.matchup.total_matches.cmp(&a.matchup.total_matches))
            .then_with(|| compare_pair(&a.matchup, &b.matchup))
    });
    polarized
}

/// The `n` best heroes under `metric`
pub fn top_heroes(heroes: &[HeroStat], metric: HeroMetric, n: usize) -> Vec<&HeroStat> {
    let mut ranked: Vec<&HeroStat> = heroes.iter().collect();
    ranked.sort_by(|a, b| {
        metric
            .value(b)
            .total_cmp(&metric.value(a))
            .then_with(|| a.hero.cmp(&b.hero))
    });
    ranked.truncate(n);
    ranked
}

/// Top heroes of every tournament of a tagged combination, in tournament order
pub fn compare_top_heroes(
    tagged: &TaggedStats,
    metric: HeroMetric,
    n: usize,
) -> Vec<TournamentLeaders<'_>> {
    tagged
        .tournaments
        .iter()
        .map(|t| TournamentLeaders {
            label: &t.label,
            heroes: top_heroes(&t.stats.hero_stats, metric, n),
        })
        .collect()
}

fn compare_pair(a: &MatchupStat, b: &MatchupStat) -> Ordering {
    a.hero
        .cmp(&b.hero)
        .then_with(|| a.opponent_hero.cmp(&b.opponent_hero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, Side};
    use crate::stats::{CombineMode, CombinedStats, combine};
    use std::collections::BTreeMap;

    fn hero(name: &str, wins: u32, losses: u32) -> HeroStat {
        HeroStat {
            hero: name.to_string(),
            wins,
            losses,
            total_matches: wins + losses,
            win_rate: crate::stats::win_rate(wins, losses),
            matchups: BTreeMap::new(),
        }
    }

    fn matchup(hero: &str, opponent: &str, wins: u32, losses: u32) -> MatchupStat {
        MatchupStat {
            hero: hero.to_string(),
            opponent_hero: opponent.to_string(),
            wins,
            losses,
            total_matches: wins + losses,
            win_rate: crate::stats::win_rate(wins, losses),
        }
    }

    fn names<'a>(heroes: &[&'a HeroStat]) -> Vec<&'a str> {
        heroes.iter().map(|h| h.hero.as_str()).collect()
    }

    #[test]
    fn test_rank_heroes_breaks_ties_by_volume() {
        let heroes = vec![hero("Fai", 1, 1), hero("Kano", 5, 5), hero("Katsu", 3, 0)];

        let ranked = rank_heroes(&heroes);

        assert_eq!(names(&ranked), vec!["Katsu", "Kano", "Fai"]);
    }

    #[test]
    fn test_polarized_matchups_filter_and_order() {
        let settings = AnalysisSettings::default();
        let matchups = vec![
            matchup("Fai", "Kano", 6, 4),    // 60%, counts
            matchup("Kano", "Fai", 4, 6),    // 40%, counts
            matchup("Katsu", "Fai", 9, 1),   // 90%, most lopsided
            matchup("Dash", "Fai", 3, 3),    // even
            matchup("Dash", "Kano", 4, 0),   // too few matches
        ];

        let polarized = polarized_matchups(&matchups, &settings);

        let pairs: Vec<(&str, &str)> = polarized
            .iter()
            .map(|p| (p.matchup.hero.as_str(), p.matchup.opponent_hero.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Katsu", "Fai"), ("Fai", "Kano"), ("Kano", "Fai")]);
        assert_eq!(polarized[0].deviation, 40.0);
    }

    #[test]
    fn test_top_heroes_by_metric() {
        let heroes = vec![hero("Fai", 2, 0), hero("Kano", 5, 5), hero("Katsu", 3, 1)];

        assert_eq!(names(&top_heroes(&heroes, HeroMetric::Wins, 2)), vec!["Kano", "Katsu"]);
        assert_eq!(names(&top_heroes(&heroes, HeroMetric::WinRate, 1)), vec!["Fai"]);
        assert_eq!(
            names(&top_heroes(&heroes, HeroMetric::TotalMatches, 5)),
            vec!["Kano", "Katsu", "Fai"]
        );
    }

    #[test]
    fn test_compare_top_heroes_per_tournament() {
        let record = |p1: (&str, &str), p2: (&str, &str)| {
            MatchRecord::try_new("Round 1", p1, p2, Some(Side::Player1)).unwrap()
        };
        let combined = combine(
            vec![
                vec![record(("Alice", "Fai"), ("Bob", "Kano"))],
                vec![record(("Carol", "Katsu"), ("Dave", "Fai"))],
            ],
            vec!["Bologna".to_string(), "Lille".to_string()],
            CombineMode::Tagged,
        )
        .unwrap();
        let CombinedStats::Tagged(tagged) = combined else {
            panic!("expected tagged stats");
        };

        let leaders = compare_top_heroes(&tagged, HeroMetric::Wins, 1);

        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].label, "Bologna");
        assert_eq!(names(&leaders[0].heroes), vec!["Fai"]);
        assert_eq!(names(&leaders[1].heroes), vec!["Katsu"]);
    }
}
