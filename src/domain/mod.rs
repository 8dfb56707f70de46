mod collection;
pub mod models;
pub mod normalizer;
mod progress;
pub mod tournament;

pub use collection::{LabeledTournament, TournamentSet};
pub use models::*;
pub use normalizer::normalize;
pub use progress::RoundProgress;
pub use tournament::TournamentRef;
