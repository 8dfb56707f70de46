use std::ops::RangeInclusive;

/// Walks round numbers from 1 and applies the consecutive-empty stopping rule
pub struct RoundCursor {
    next_round: u32,
    max_round: u32,
    max_consecutive_empty: u32,
    consecutive_empty: u32,
}

impl RoundCursor {
    pub fn new(max_round: u32, max_consecutive_empty: u32) -> Self {
        Self {
            next_round: 1,
            max_round,
            max_consecutive_empty: max_consecutive_empty.max(1),
            consecutive_empty: 0,
        }
    }

    pub fn next_round(&self) -> u32 {
        self.next_round
    }

    pub fn has_stopped(&self) -> bool {
        self.consecutive_empty >= self.max_consecutive_empty
    }

    pub fn is_finished(&self) -> bool {
        self.has_stopped() || self.next_round > self.max_round
    }

    /// Rounds to request next, at most `width` of them
    pub fn next_window(&self, width: usize) -> Option<RangeInclusive<u32>> {
        if self.is_finished() {
            return None;
        }

        let width = u32::try_from(width.max(1)).unwrap_or(u32::MAX);
        let last = self
            .next_round
            .saturating_add(width - 1)
            .min(self.max_round);

        Some(self.next_round..=last)
    }

    /// Record the result of the current round and advance
    pub fn record(&mut self, was_empty: bool) {
        if was_empty {
            self.consecutive_empty += 1;
        } else {
            self.consecutive_empty = 0;
        }
        self.next_round += 1;
    }
}
