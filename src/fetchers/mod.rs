mod cached;
mod coverage_scraper;
mod event_scraper;
mod selectors;

pub use cached::CachedFetcher;
pub use coverage_scraper::CoverageScraper;
pub use event_scraper::{
    DiscoveredEvent, DiscoveredTournament, EventListing, EventScraper, parse_event_date,
    results_url_for,
};
