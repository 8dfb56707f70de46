mod collect;
mod cursor;
mod fetcher;

pub use collect::collect;
pub use cursor::RoundCursor;
pub use fetcher::RoundFetcher;
