use colored::*;
use std::fmt::Write;

use crate::analysis::{HeroMetric, TournamentLeaders, polarized_matchups, rank_heroes};
use crate::config::AnalysisSettings;
use crate::stats::{HeroStat, TournamentStats};

const RULE_WIDTH: usize = 60;

pub fn print_tournament_summary(title: &str, stats: &TournamentStats, settings: &AnalysisSettings) {
    print!("{}", render_tournament_summary(title, stats, settings));
}

pub fn print_comparison(leaders: &[TournamentLeaders<'_>], metric: HeroMetric) {
    print!("{}", render_comparison(leaders, metric));
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

/// Headline counts, hero ranking and lopsided matchups of one aggregate
pub fn render_tournament_summary(
    title: &str,
    stats: &TournamentStats,
    settings: &AnalysisSettings,
) -> String {
    let mut out = String::new();
    write_header(&mut out, title);

    let _ = writeln!(
        out,
        "{} matches ({} decided), {} players, {} heroes",
        stats.match_table.len().to_string().bold(),
        stats.decided_matches(),
        stats.player_stats.len(),
        stats.hero_stats.len()
    );

    let _ = writeln!(out, "\n{}", "Top heroes by win rate".bold().yellow());
    for (idx, hero) in rank_heroes(&stats.hero_stats)
        .into_iter()
        .take(settings.top_n)
        .enumerate()
    {
        let _ = writeln!(out, "  #{:<3}{}", idx + 1, hero_line(hero));
    }

    let polarized = polarized_matchups(&stats.matchup_stats, settings);
    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "Polarized matchups (>= {:.0}% or <= {:.0}%, min {} matches)",
            settings.polarized_threshold,
            100.0 - settings.polarized_threshold,
            settings.min_matches
        )
        .bold()
        .yellow()
    );
    if polarized.is_empty() {
        let _ = writeln!(out, "  {}", "none".dimmed());
    }
    for entry in polarized.iter().take(settings.top_n) {
        let m = &entry.matchup;
        let _ = writeln!(
            out,
            "  {} vs {}: {} ({}/{})",
            m.hero,
            m.opponent_hero,
            colored_rate(m.win_rate),
            m.wins,
            m.total_matches
        );
    }

    out.push('\n');
    out
}

/// Side-by-side top heroes of each tagged tournament
pub fn render_comparison(leaders: &[TournamentLeaders<'_>], metric: HeroMetric) -> String {
    let mut out = String::new();
    write_header(&mut out, &format!("Top heroes by {}", metric_name(metric)));

    for tournament in leaders {
        let _ = writeln!(out, "{}", tournament.label.bold());
        if tournament.heroes.is_empty() {
            let _ = writeln!(out, "  {}", "no heroes".dimmed());
        }
        for (idx, hero) in tournament.heroes.iter().enumerate() {
            let _ = writeln!(out, "  #{:<3}{}", idx + 1, hero_line(hero));
        }
    }

    out.push('\n');
    out
}

// --- Formatting Helpers ---

fn write_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.bold().cyan());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH).cyan());
}

fn hero_line(hero: &HeroStat) -> String {
    format!(
        "{:<28} {} ({}W-{}L)",
        hero.hero,
        colored_rate(hero.win_rate),
        hero.wins,
        hero.losses
    )
}

fn colored_rate(win_rate: f64) -> ColoredString {
    let text = format!("{:.2}%", win_rate);
    if win_rate >= 55.0 {
        text.green()
    } else if win_rate <= 45.0 {
        text.red()
    } else {
        text.normal()
    }
}

fn metric_name(metric: HeroMetric) -> &'static str {
    match metric {
        HeroMetric::Wins => "wins",
        HeroMetric::WinRate => "win rate",
        HeroMetric::TotalMatches => "total matches",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, Side};
    use crate::stats::aggregate;

    fn sample_stats() -> TournamentStats {
        let mut matches = Vec::new();
        for round in 1..=5 {
            let label = format!("Round {}", round);
            matches.push(
                MatchRecord::try_new(
                    &label,
                    ("Alice", "Katsu"),
                    ("Bob", "Fai"),
                    Some(Side::Player1),
                )
                .unwrap(),
            );
        }
        aggregate(&matches)
    }

    #[test]
    fn test_summary_lists_heroes_and_polarized_matchups() {
        colored::control::set_override(false);

        let out = render_tournament_summary("Calling Bologna", &sample_stats(), &AnalysisSettings::default());

        assert!(out.contains("Calling Bologna"));
        assert!(out.contains("5 matches (5 decided), 2 players, 2 heroes"));
        assert!(out.contains("#1  Katsu"));
        assert!(out.contains("Katsu vs Fai: 100.00% (5/5)"));
        assert!(out.contains("Fai vs Katsu: 0.00% (0/5)"));
    }

    #[test]
    fn test_comparison_shows_each_tournament() {
        colored::control::set_override(false);
        let stats = sample_stats();
        let leaders = vec![
            TournamentLeaders {
                label: "Bologna",
                heroes: vec![&stats.hero_stats[1]],
            },
            TournamentLeaders {
                label: "Lille",
                heroes: Vec::new(),
            },
        ];

        let out = render_comparison(&leaders, HeroMetric::Wins);

        assert!(out.contains("Top heroes by wins"));
        assert!(out.contains("Bologna"));
        assert!(out.contains("Katsu"));
        assert!(out.contains("no heroes"));
    }
}
