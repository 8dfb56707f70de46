pub mod compare;
pub mod discovery;
pub mod scrape;
mod source;

pub use compare::{CompareRequest, CompareService};
pub use discovery::{DiscoveryService, LinkFiles, write_link_files};
pub use scrape::ScrapeService;
pub use source::TournamentSource;
