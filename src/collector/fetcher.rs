use anyhow::Result;

use crate::domain::{RawRow, TournamentRef};

/// Source of raw results rows for one round of a tournament.
///
/// A round that is not published (or has no parseable rows) is `Ok(vec![])`.
/// `Err` is reserved for transport failures.
#[allow(async_fn_in_trait)]
pub trait RoundFetcher {
    async fn fetch_round(&self, tournament: &TournamentRef, round: u32) -> Result<Vec<RawRow>>;
}

impl<F: RoundFetcher> RoundFetcher for &F {
    async fn fetch_round(&self, tournament: &TournamentRef, round: u32) -> Result<Vec<RawRow>> {
        (**self).fetch_round(tournament, round).await
    }
}
