use anyhow::Result;
use log::info;

use crate::cache::Cache;
use crate::collector::collect;
use crate::config::{AppConfig, CollectorSettings};
use crate::domain::{MatchRecord, TournamentRef};
use crate::fetchers::{CachedFetcher, CoverageScraper};

/// Collects tournaments from coverage pages, through the round cache when enabled
pub struct TournamentSource {
    scraper: CoverageScraper,
    cache: Option<Cache>,
    settings: CollectorSettings,
}

impl TournamentSource {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let cache = if config.cache.enabled {
            Some(Cache::new(&config.cache.dir)?)
        } else {
            info!("Round cache disabled");
            None
        };

        Ok(Self {
            scraper: CoverageScraper::new(&config.scraper)?,
            cache,
            settings: config.collector.clone(),
        })
    }

    pub async fn collect(&self, tournament: &TournamentRef) -> Vec<MatchRecord> {
        match &self.cache {
            Some(cache) => {
                let fetcher = CachedFetcher::new(&self.scraper, cache);
                collect(tournament, &fetcher, &self.settings).await
            }
            None => collect(tournament, &self.scraper, &self.settings).await,
        }
    }
}
