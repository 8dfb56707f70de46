use anyhow::Result;
use log::{info, warn};
use std::collections::HashSet;

use super::source::TournamentSource;
use crate::analysis::{HeroMetric, compare_top_heroes, polarized_matchups};
use crate::config::AppConfig;
use crate::domain::{MatchRecord, TournamentRef};
use crate::errors::CombineError;
use crate::export::{export_polarized, export_stats, export_tagged};
use crate::report::{display_success, display_warning, print_comparison, print_tournament_summary};
use crate::stats::{CombineMode, CombinedStats, combine};

/// Scrape several tournaments and combine them, merged or tagged
pub struct CompareService {
    config: AppConfig,
    source: TournamentSource,
}

pub struct CompareRequest {
    pub urls: Vec<String>,
    /// One label per URL; slugs are title-cased when empty
    pub labels: Vec<String>,
    pub mode: CombineMode,
    pub metric: HeroMetric,
}

impl CompareService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let source = TournamentSource::new(&config)?;
        Ok(Self { config, source })
    }

    pub async fn run(&self, request: &CompareRequest) -> Result<()> {
        let tournaments = parse_tournaments(&request.urls)?;
        let labels = resolve_labels(&tournaments, &request.labels)?;
        info!("=== Comparing {} tournaments ===", tournaments.len());

        let mut sequences: Vec<Vec<MatchRecord>> = Vec::new();
        let mut kept_labels = Vec::new();
        for (tournament, label) in tournaments.iter().zip(labels) {
            let matches = self.source.collect(tournament).await;
            if matches.is_empty() {
                display_warning(&format!("No data for {}, skipping", label));
                continue;
            }
            sequences.push(matches);
            kept_labels.push(label);
        }

        if sequences.is_empty() {
            warn!("No tournament data found. Please check the URLs and try again.");
            return Ok(());
        }

        let title = kept_labels.join(" + ");
        match combine(sequences, kept_labels, request.mode)? {
            CombinedStats::Merged(stats) => {
                export_stats(&stats, &self.config.export)?;
                export_polarized(
                    &polarized_matchups(&stats.matchup_stats, &self.config.analysis),
                    &self.config.export,
                )?;
                print_tournament_summary(&title, &stats, &self.config.analysis);
            }
            CombinedStats::Tagged(tagged) => {
                export_tagged(&tagged, &self.config.export)?;
                let leaders =
                    compare_top_heroes(&tagged, request.metric, self.config.analysis.top_n);
                print_comparison(&leaders, request.metric);
            }
        }

        display_success(&format!(
            "All files saved to '{}'",
            self.config.export.output_dir.display()
        ));
        Ok(())
    }
}

fn parse_tournaments(urls: &[String]) -> Result<Vec<TournamentRef>> {
    urls.iter().map(|url| TournamentRef::from_url(url)).collect()
}

/// Explicit labels must pair up with the URLs one to one and be unique
fn resolve_labels(tournaments: &[TournamentRef], labels: &[String]) -> Result<Vec<String>, CombineError> {
    let resolved: Vec<String> = if labels.is_empty() {
        tournaments.iter().map(TournamentRef::display_name).collect()
    } else if labels.len() != tournaments.len() {
        return Err(CombineError::LabelCountMismatch {
            sequences: tournaments.len(),
            labels: labels.len(),
        });
    } else {
        labels.to_vec()
    };

    let mut seen = HashSet::new();
    if let Some(duplicate) = resolved.iter().find(|label| !seen.insert(label.as_str())) {
        return Err(CombineError::DuplicateLabel(duplicate.clone()));
    }

    Ok(resolved)
}
