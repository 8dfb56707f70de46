use anyhow::Result;
use log::{debug, warn};

use crate::cache::Cache;
use crate::collector::RoundFetcher;
use crate::domain::{RawRow, TournamentRef};

/// Serves rounds from the file cache and stores newly fetched finished rounds.
///
/// Empty rounds are never cached since they may simply not be published yet.
/// Rounds with a pairing that has no winner marker are still in progress and
/// are refetched on every run until all results are in.
pub struct CachedFetcher<'a, F> {
    inner: F,
    cache: &'a Cache,
}

impl<'a, F: RoundFetcher> CachedFetcher<'a, F> {
    pub fn new(inner: F, cache: &'a Cache) -> Self {
        Self { inner, cache }
    }
}

impl<F: RoundFetcher> RoundFetcher for CachedFetcher<'_, F> {
    async fn fetch_round(&self, tournament: &TournamentRef, round: u32) -> Result<Vec<RawRow>> {
        match self.cache.load_round(tournament.slug(), round) {
            Ok(Some(rows)) => {
                debug!("Round {} of {} served from cache", round, tournament.slug());
                return Ok(rows);
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable cache entry: {:#}", e),
        }

        let rows = self.inner.fetch_round(tournament, round).await?;

        if is_finished(&rows) {
            if let Err(e) = self.cache.save_round(tournament.slug(), round, &rows) {
                warn!("Failed to cache round {} of {}: {:#}", round, tournament.slug(), e);
            }
        }

        Ok(rows)
    }
}

/// A round is finished once it has rows and every pairing carries a winner marker
fn is_finished(rows: &[RawRow]) -> bool {
    !rows.is_empty()
        && rows
            .iter()
            .filter(|row| row.participants.len() >= 2)
            .all(|row| row.participants.iter().any(|p| p.is_winner))
}
