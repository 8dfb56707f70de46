use anyhow::Result;
use log::{info, warn};

use super::source::TournamentSource;
use crate::analysis::polarized_matchups;
use crate::config::AppConfig;
use crate::domain::TournamentRef;
use crate::export::{export_polarized, export_stats};
use crate::report::{display_success, print_tournament_summary};
use crate::stats::aggregate;

/// Scrape one tournament, export its tables and print a summary
pub struct ScrapeService {
    config: AppConfig,
    source: TournamentSource,
}

impl ScrapeService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let source = TournamentSource::new(&config)?;
        Ok(Self { config, source })
    }

    pub async fn run(&self, url: &str) -> Result<()> {
        let tournament = TournamentRef::from_url(url)?;
        info!("=== Scraping {} ===", tournament.display_name());

        let matches = self.source.collect(&tournament).await;
        if matches.is_empty() {
            warn!("No tournament data found. Please check the URL and try again.");
            return Ok(());
        }

        let stats = aggregate(&matches);
        export_stats(&stats, &self.config.export)?;
        export_polarized(
            &polarized_matchups(&stats.matchup_stats, &self.config.analysis),
            &self.config.export,
        )?;

        print_tournament_summary(&tournament.display_name(), &stats, &self.config.analysis);
        display_success(&format!(
            "All files saved to '{}'",
            self.config.export.output_dir.display()
        ));
        Ok(())
    }
}
