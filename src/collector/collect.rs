use futures::future::join_all;
use log::{debug, info, warn};

use super::cursor::RoundCursor;
use super::fetcher::RoundFetcher;
use crate::config::CollectorSettings;
use crate::domain::{normalize, round_label, MatchRecord, RoundProgress, TournamentRef};

/// Collect every match of a tournament, round by round, in ascending round order.
///
/// Rounds are requested until `max_round` or until `max_consecutive_empty`
/// consecutive rounds come back empty. Transport errors count as empty rounds.
/// With `concurrency > 1` rounds are fetched in windows; results past the stop
/// point of a window are discarded.
pub async fn collect<F: RoundFetcher>(
    tournament: &TournamentRef,
    fetcher: &F,
    settings: &CollectorSettings,
) -> Vec<MatchRecord> {
    info!("Collecting rounds for {}", tournament.slug());

    let mut cursor = RoundCursor::new(settings.max_round, settings.max_consecutive_empty);
    let mut progress = RoundProgress::new();
    let mut matches = Vec::new();

    while let Some(window) = cursor.next_window(settings.concurrency) {
        let requests = window
            .clone()
            .map(|round| fetch_normalized(fetcher, tournament, round));
        let results = join_all(requests).await;

        for (round, records) in window.zip(results) {
            if cursor.has_stopped() {
                debug!("Discarding round {} fetched past the stop point", round);
                continue;
            }

            progress.record_round(round, records.len());
            cursor.record(records.is_empty());
            matches.extend(records);
        }
    }

    progress.log_summary();
    matches
}

async fn fetch_normalized<F: RoundFetcher>(
    fetcher: &F,
    tournament: &TournamentRef,
    round: u32,
) -> Vec<MatchRecord> {
    match fetcher.fetch_round(tournament, round).await {
        Ok(rows) => normalize(&round_label(round), &rows),
        Err(e) => {
            warn!("Failed to fetch round {} of {}: {:#}", round, tournament.slug(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawRow, Side};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FakeFetcher {
        rounds: HashMap<u32, Vec<RawRow>>,
        failing: Vec<u32>,
        requested: Mutex<Vec<u32>>,
    }

    impl FakeFetcher {
        fn with_rounds(populated: &[u32]) -> Self {
            let rounds = populated
                .iter()
                .map(|&round| {
                    let first = format!("P{}a", round);
                    let second = format!("P{}b", round);
                    let row = RawRow::pairing(
                        (first.as_str(), "Dorinthea"),
                        (second.as_str(), "Katsu"),
                        Some(Side::Player1),
                    );
                    (round, vec![row])
                })
                .collect();

            Self {
                rounds,
                failing: Vec::new(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<u32> {
            let mut rounds = self.requested.lock().unwrap().clone();
            rounds.sort_unstable();
            rounds
        }
    }

    impl RoundFetcher for FakeFetcher {
        async fn fetch_round(&self, _tournament: &TournamentRef, round: u32) -> anyhow::Result<Vec<RawRow>> {
            self.requested.lock().unwrap().push(round);

            // Later rounds resolve first so ordering has to come from the collector
            tokio::time::sleep(Duration::from_millis(u64::from(20 - round.min(20)))).await;

            if self.failing.contains(&round) {
                anyhow::bail!("connection reset");
            }
            Ok(self.rounds.get(&round).cloned().unwrap_or_default())
        }
    }

    fn tournament() -> TournamentRef {
        TournamentRef::from_url("https://fabtcg.com/en/coverage/test-event/results/").unwrap()
    }

    fn settings(max_round: u32, max_consecutive_empty: u32, concurrency: usize) -> CollectorSettings {
        CollectorSettings {
            max_round,
            max_consecutive_empty,
            concurrency,
        }
    }

    #[tokio::test]
    async fn test_stops_at_first_empty_round() {
        let fetcher = FakeFetcher::with_rounds(&[1, 2, 3]);

        let matches = collect(&tournament(), &fetcher, &settings(20, 1, 1)).await;

        assert_eq!(matches.len(), 3);
        assert_eq!(fetcher.requested(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_tolerates_gap_with_higher_threshold() {
        let fetcher = FakeFetcher::with_rounds(&[1, 2, 4]);

        let matches = collect(&tournament(), &fetcher, &settings(20, 2, 1)).await;

        let labels: Vec<&str> = matches.iter().map(|m| m.round_label()).collect();
        assert_eq!(labels, vec!["Round 1", "Round 2", "Round 4"]);
        assert_eq!(fetcher.requested(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_never_exceeds_max_round() {
        let fetcher = FakeFetcher::with_rounds(&(1..=30).collect::<Vec<_>>());

        let matches = collect(&tournament(), &fetcher, &settings(20, 1, 1)).await;

        assert_eq!(matches.len(), 20);
        assert_eq!(fetcher.requested().last(), Some(&20));
    }

    #[tokio::test]
    async fn test_transport_error_counts_as_empty() {
        let mut fetcher = FakeFetcher::with_rounds(&[1, 2, 3]);
        fetcher.failing = vec![2];

        let matches = collect(&tournament(), &fetcher, &settings(20, 1, 1)).await;

        assert_eq!(matches.len(), 1);
        assert_eq!(fetcher.requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_concurrent_windows_keep_round_order() {
        let fetcher = FakeFetcher::with_rounds(&[1, 2, 3, 4, 5, 6, 7]);

        let matches = collect(&tournament(), &fetcher, &settings(20, 1, 4)).await;

        let labels: Vec<String> = matches.iter().map(|m| m.round_label().to_string()).collect();
        let expected: Vec<String> = (1..=7).map(round_label).collect();
        assert_eq!(labels, expected);
        assert_eq!(fetcher.requested(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[tokio::test]
    async fn test_no_data_is_empty_not_error() {
        let fetcher = FakeFetcher::with_rounds(&[]);

        let matches = collect(&tournament(), &fetcher, &settings(20, 3, 1)).await;

        assert!(matches.is_empty());
        assert_eq!(fetcher.requested(), vec![1, 2, 3]);
    }
}
