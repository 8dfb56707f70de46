use anyhow::{Context, Result, bail};
use chrono::{Month, NaiveDate};
use log::{debug, info, warn};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use super::selectors::{clean_text, compile, first_text};
use crate::config::ScraperSettings;
use crate::http::RateLimitedClient;

const MONTH_SECTION_SELECTOR: &str = "div.block-pageLinkBlockWithURL";
const MONTH_HEADING_SELECTOR: &str = "h2";
const CARD_SELECTOR: &str = "div.listblock-item";
const CARD_LINK_SELECTOR: &str = "a.item-link[href]";
const CARD_TITLE_SELECTOR: &str = "h5";
const CARD_TEXT_SELECTOR: &str = "p";
const RESOURCES_CARD_TITLE: &str = "Pairings, Results, and Standings";

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// An event card from the organised-play calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListing {
    pub month: String,
    pub name: String,
    pub url: Url,
    pub dates: String,
}

/// A tournament of an event whose coverage results can be scraped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTournament {
    pub name: Option<String>,
    pub format: String,
    pub url: Url,
    pub results_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredEvent {
    pub listing: EventListing,
    pub resources_url: Url,
    pub tournaments: Vec<DiscoveredTournament>,
}

impl DiscoveredEvent {
    /// Events whose dates cannot be parsed are treated as upcoming
    pub fn is_past(&self, today: NaiveDate) -> bool {
        parse_event_date(&self.listing.dates).is_some_and(|date| date < today)
    }
}

struct EventSelectors {
    month_section: Selector,
    month_heading: Selector,
    card: Selector,
    card_link: Selector,
    card_title: Selector,
    card_text: Selector,
}

impl EventSelectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            month_section: compile(MONTH_SECTION_SELECTOR)?,
            month_heading: compile(MONTH_HEADING_SELECTOR)?,
            card: compile(CARD_SELECTOR)?,
            card_link: compile(CARD_LINK_SELECTOR)?,
            card_title: compile(CARD_TITLE_SELECTOR)?,
            card_text: compile(CARD_TEXT_SELECTOR)?,
        })
    }
}

/// Crawls the organised-play calendar for tournaments with published coverage
pub struct EventScraper {
    client: RateLimitedClient,
    base_url: Url,
    organised_play_url: Url,
    selectors: EventSelectors,
}

impl EventScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        let base_url = Url::parse(settings.base_url).context("Invalid base URL")?;
        let organised_play_url = base_url
            .join(settings.organised_play_path)
            .context("Invalid organised-play path")?;

        Ok(Self {
            client,
            base_url,
            organised_play_url,
            selectors: EventSelectors::compile()?,
        })
    }

    /// Walk every calendar event and collect its tournaments matching `format_filter`.
    ///
    /// Events without a resources page are skipped; a failure on one event
    /// does not abort the crawl.
    pub async fn discover(&self, format_filter: &str) -> Result<Vec<DiscoveredEvent>> {
        info!("Fetching organised play page: {}", self.organised_play_url);
        let listings = self.parse_calendar(
            &self
                .fetch_html(&self.organised_play_url)
                .await?
                .with_context(|| {
                    format!("Organised play page unavailable: {}", self.organised_play_url)
                })?,
        );
        info!("Found {} events on the calendar", listings.len());

        let mut events = Vec::new();
        for listing in listings {
            match self.discover_event(&listing, format_filter).await {
                Ok(Some(event)) => events.push(event),
                Ok(None) => debug!("No resources page found for {}", listing.name),
                Err(e) => warn!("Skipping event {}: {:#}", listing.name, e),
            }
        }

        Ok(events)
    }

    async fn discover_event(
        &self,
        listing: &EventListing,
        format_filter: &str,
    ) -> Result<Option<DiscoveredEvent>> {
        info!("Processing event: {}", listing.name);

        let resources_link = match self.fetch_html(&listing.url).await? {
            Some(event_page) => self.find_resources_link(&event_page, &listing.url),
            None => None,
        };
        let Some(resources_url) = resources_link else {
            return Ok(None);
        };

        let tournaments = match self.fetch_html(&resources_url).await? {
            Some(page) => self.parse_tournament_cards(&page, &resources_url, format_filter),
            None => bail!("Resources page unavailable: {}", resources_url),
        };
        debug!("  {} matching tournaments", tournaments.len());

        Ok(Some(DiscoveredEvent {
            listing: listing.clone(),
            resources_url,
            tournaments,
        }))
    }

    // --- Page Parsing ---

    /// Event cards grouped under month headings of the calendar page
    pub fn parse_calendar(&self, html: &Html) -> Vec<EventListing> {
        let mut listings = Vec::new();

        for section in html.select(&self.selectors.month_section) {
            let Some(month) = first_text(section, &self.selectors.month_heading) else {
                continue;
            };
            if !is_month_heading(&month) {
                continue;
            }

            for card in section.select(&self.selectors.card) {
                if let Some(listing) = self.parse_event_card(card, &month) {
                    listings.push(listing);
                }
            }
        }

        listings
    }

    fn parse_event_card(&self, card: ElementRef<'_>, month: &str) -> Option<EventListing> {
        let link = card.select(&self.selectors.card_link).next()?;
        let url = join_href(&self.base_url, link)?;

        Some(EventListing {
            month: month.to_string(),
            name: first_text(link, &self.selectors.card_title)
                .unwrap_or_else(|| "Unknown Event".to_string()),
            url,
            dates: first_text(link, &self.selectors.card_text)
                .unwrap_or_else(|| "No dates".to_string()),
        })
    }

    /// Link of the card titled "Pairings, Results, and Standings" on an event page
    pub fn find_resources_link(&self, html: &Html, page_url: &Url) -> Option<Url> {
        html.select(&self.selectors.card)
            .find(|card| {
                card.select(&self.selectors.card_title)
                    .any(|title| clean_text(title).contains(RESOURCES_CARD_TITLE))
            })
            .and_then(|card| card.select(&self.selectors.card_link).next())
            .and_then(|link| join_href(page_url, link))
    }

    /// Tournament cards of a resources page whose format text contains `format_filter`
    pub fn parse_tournament_cards(
        &self,
        html: &Html,
        page_url: &Url,
        format_filter: &str,
    ) -> Vec<DiscoveredTournament> {
        html.select(&self.selectors.card)
            .filter_map(|card| {
                let link = card.select(&self.selectors.card_link).next()?;
                let format = first_text(card, &self.selectors.card_text).unwrap_or_default();
                if !format.contains(format_filter) {
                    return None;
                }

                let url = join_href(page_url, link)?;
                Some(DiscoveredTournament {
                    name: first_text(card, &self.selectors.card_title),
                    format,
                    results_url: results_url_for(&url),
                    url,
                })
            })
            .collect()
    }

    async fn fetch_html(&self, url: &Url) -> Result<Option<Html>> {
        let body = self.client.get_text(url.as_str()).await?;
        Ok(body.map(|text| Html::parse_document(&text)))
    }
}

// --- URL and Date Helpers ---

fn join_href(base: &Url, link: ElementRef<'_>) -> Option<Url> {
    let href = link.value().attr("href")?;
    base.join(href).ok()
}

fn is_month_heading(heading: &str) -> bool {
    let heading = heading.to_lowercase();
    MONTH_NAMES.iter().any(|month| heading.contains(month))
}

/// Rewrite a tournament page URL to its coverage results URL.
///
/// `en` is inserted as the first path segment unless already present, and
/// `results/` is appended.
pub fn results_url_for(url: &Url) -> String {
    let path = url.path().trim_start_matches('/');
    let localized = if path == "en" || path.starts_with("en/") {
        path.to_string()
    } else {
        format!("en/{}", path)
    };

    let mut results = format!("{}://{}/{}", url.scheme(), host_with_port(url), localized);
    if !results.ends_with('/') {
        results.push('/');
    }
    results.push_str("results/");
    results
}

fn host_with_port(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Parse calendar dates like "Oct 24-26, 2025" or "Oct 24, 2025" to the last day of the event
pub fn parse_event_date(dates: &str) -> Option<NaiveDate> {
    let (days_part, year_part) = dates.rsplit_once(',')?;
    let year: i32 = year_part.trim().parse().ok()?;

    let (start, end) = match days_part.split_once('-') {
        Some((start, end)) => (start.trim(), end.trim()),
        None => (days_part.trim(), days_part.trim()),
    };

    let mut start_tokens = start.split_whitespace();
    let start_month = parse_month(start_tokens.next()?)?;

    // "Oct 30-Nov 2" carries its own month on the end day
    let end_tokens: Vec<&str> = end.split_whitespace().collect();
    let (month, day) = match end_tokens.as_slice() {
        [day] => (start_month, day.parse::<u32>().ok()?),
        [month, day] => (parse_month(month)?, day.parse::<u32>().ok()?),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month(token: &str) -> Option<u32> {
    token
        .trim_end_matches('.')
        .parse::<Month>()
        .ok()
        .map(|month| month.number_from_month())
}
