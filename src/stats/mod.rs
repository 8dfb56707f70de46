pub mod aggregator;
pub mod combiner;
mod matchups;
pub mod types;
mod win_rate;

pub use aggregator::aggregate;
pub use combiner::{
    combine, combine_merged, combine_tagged, CombineMode, CombinedStats, TaggedStats,
    TournamentBreakdown,
};
pub use matchups::flatten_matchups;
pub use types::{
    HeroStat, MatchResult, MatchupStat, PlayerDetail, PlayerStat, TournamentStats, WinLoss,
};
pub use win_rate::win_rate;
