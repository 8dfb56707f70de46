use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::fetchers::{DiscoveredEvent, EventScraper};
use crate::report::display_success;

/// Crawl the event calendar and write past/upcoming results URLs to text files
pub struct DiscoveryService {
    config: AppConfig,
    scraper: EventScraper,
}

/// Files written by a discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFiles {
    pub past: PathBuf,
    pub upcoming: PathBuf,
    pub past_events: usize,
    pub upcoming_events: usize,
}

impl DiscoveryService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let scraper = EventScraper::new(&config.scraper)?;
        Ok(Self { config, scraper })
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Discovering {} tournaments ===", self.config.discovery.format_filter);

        let events = self
            .scraper
            .discover(&self.config.discovery.format_filter)
            .await?;
        let tournaments: usize = events.iter().map(|e| e.tournaments.len()).sum();
        info!("Found {} events with {} tournaments", events.len(), tournaments);

        let today = Local::now().date_naive();
        let files = write_link_files(&events, &self.config.discovery.file_prefix, today)?;

        display_success(&format!(
            "Saved {} past events to {}",
            files.past_events,
            files.past.display()
        ));
        display_success(&format!(
            "Saved {} upcoming events to {}",
            files.upcoming_events,
            files.upcoming.display()
        ));
        Ok(())
    }
}

/// Split events on `today` and write one results URL per line to
/// `<prefix>_past.txt` and `<prefix>_upcoming.txt`
pub fn write_link_files(events: &[DiscoveredEvent], prefix: &str, today: NaiveDate) -> Result<LinkFiles> {
    let (past, upcoming): (Vec<&DiscoveredEvent>, Vec<&DiscoveredEvent>) =
        events.iter().partition(|event| event.is_past(today));

    let past_path = PathBuf::from(format!("{}_past.txt", prefix));
    let upcoming_path = PathBuf::from(format!("{}_upcoming.txt", prefix));

    fs::write(&past_path, link_lines(&past))
        .with_context(|| format!("Failed to write {}", past_path.display()))?;
    fs::write(&upcoming_path, link_lines(&upcoming))
        .with_context(|| format!("Failed to write {}", upcoming_path.display()))?;

    Ok(LinkFiles {
        past: past_path,
        upcoming: upcoming_path,
        past_events: past.len(),
        upcoming_events: upcoming.len(),
    })
}

fn link_lines(events: &[&DiscoveredEvent]) -> String {
    events
        .iter()
        .flat_map(|event| event.tournaments.iter())
        .map(|tournament| format!("{}\n", tournament.results_url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::{DiscoveredTournament, EventListing};
    use reqwest::Url;

    fn event(name: &str, dates: &str, slugs: &[&str]) -> DiscoveredEvent {
        let tournaments = slugs
            .iter()
            .map(|slug| DiscoveredTournament {
                name: Some(slug.to_string()),
                format: "Classic Constructed".to_string(),
                url: Url::parse(&format!("https://fabtcg.com/coverage/{}/", slug)).unwrap(),
                results_url: format!("https://fabtcg.com/en/coverage/{}/results/", slug),
            })
            .collect();

        DiscoveredEvent {
            listing: EventListing {
                month: "October".to_string(),
                name: name.to_string(),
                url: Url::parse("https://fabtcg.com/en/events/x/").unwrap(),
                dates: dates.to_string(),
            },
            resources_url: Url::parse("https://fabtcg.com/en/events/x/resources/").unwrap(),
            tournaments,
        }
    }

    #[test]
    fn test_write_link_files_splits_on_date() {
        let temp_dir = tempfile::tempdir().unwrap();
        let prefix = temp_dir.path().join("links");
        let events = vec![
            event("Calling Bologna", "Oct 3-5, 2025", &["calling-bologna", "bologna-day-2"]),
            event("Pro Tour Lille", "Nov 14-16, 2025", &["pro-tour-lille"]),
            event("Mystery Event", "TBA", &[]),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();

        let files = write_link_files(&events, prefix.to_str().unwrap(), today).unwrap();

        assert_eq!(files.past_events, 1);
        assert_eq!(files.upcoming_events, 2);
        assert_eq!(
            fs::read_to_string(&files.past).unwrap(),
            "https://fabtcg.com/en/coverage/calling-bologna/results/\n\
             https://fabtcg.com/en/coverage/bologna-day-2/results/\n"
        );
        assert_eq!(
            fs::read_to_string(&files.upcoming).unwrap(),
            "https://fabtcg.com/en/coverage/pro-tour-lille/results/\n"
        );
    }
}
