/// Wins over decided matches as a percentage rounded to two decimals; 0 with no decided matches
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let decided = wins + losses;
    if decided == 0 {
        return 0.0;
    }

    let rate = f64::from(wins) / f64::from(decided) * 100.0;
    round_to_hundredths(rate)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_decided_matches_is_zero() {
        assert_eq!(win_rate(0, 0), 0.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(win_rate(1, 2), 33.33);
        assert_eq!(win_rate(2, 1), 66.67);
        assert_eq!(win_rate(1, 7), 12.5);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(win_rate(5, 0), 100.0);
        assert_eq!(win_rate(0, 5), 0.0);
        assert_eq!(win_rate(1, 1), 50.0);
    }
}
