use log::info;

/// Track progress of round collection for one tournament
pub struct RoundProgress {
    rounds_with_data: usize,
    empty_rounds: usize,
    matches: usize,
}

impl RoundProgress {
    pub fn new() -> Self {
        Self {
            rounds_with_data: 0,
            empty_rounds: 0,
            matches: 0,
        }
    }

    pub fn record_round(&mut self, round: u32, match_count: usize) {
        if match_count == 0 {
            self.empty_rounds += 1;
            info!("  → Round {}: no data", round);
        } else {
            self.rounds_with_data += 1;
            self.matches += match_count;
            info!("  → Round {}: {} matches", round, match_count);
        }
    }

    pub fn rounds_with_data(&self) -> usize {
        self.rounds_with_data
    }

    pub fn empty_rounds(&self) -> usize {
        self.empty_rounds
    }

    pub fn match_count(&self) -> usize {
        self.matches
    }

    pub fn log_summary(&self) {
        info!(
            "Found {} rounds with {} total matches ({} empty rounds probed)",
            self.rounds_with_data, self.matches, self.empty_rounds
        );
    }
}

impl Default for RoundProgress {
    fn default() -> Self {
        Self::new()
    }
}
