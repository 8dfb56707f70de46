use anyhow::Result;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::selectors::{compile, first_text};
use crate::collector::RoundFetcher;
use crate::config::ScraperSettings;
use crate::domain::{RawParticipant, RawRow, TournamentRef};
use crate::http::RateLimitedClient;

const ROW_SELECTOR: &str = "div.tournament-coverage__row--results";
const PLAYER_SELECTOR: &str = "div.tournament-coverage__player";
const NAME_SELECTOR: &str = "span";
const HERO_SELECTOR: &str = "div.tournament-coverage__player-hero-and-deck";
const WINNER_CLASS: &str = "tournament-coverage__player--winner";

/// Scraper for the per-round results pages of tournament coverage
pub struct CoverageScraper {
    client: RateLimitedClient,
    selectors: CoverageSelectors,
}

struct CoverageSelectors {
    row: Selector,
    player: Selector,
    name: Selector,
    hero: Selector,
}

impl CoverageSelectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            row: compile(ROW_SELECTOR)?,
            player: compile(PLAYER_SELECTOR)?,
            name: compile(NAME_SELECTOR)?,
            hero: compile(HERO_SELECTOR)?,
        })
    }
}

impl CoverageScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            selectors: CoverageSelectors::compile()?,
        })
    }

    /// Extract every results row of a round page
    pub fn parse_round_page(&self, html: &Html) -> Vec<RawRow> {
        html.select(&self.selectors.row)
            .map(|row| self.parse_row(row))
            .collect()
    }

    fn parse_row(&self, row: ElementRef<'_>) -> RawRow {
        let participants = row
            .select(&self.selectors.player)
            .map(|player| self.parse_participant(player))
            .collect();

        RawRow::new(participants)
    }

    fn parse_participant(&self, player: ElementRef<'_>) -> RawParticipant {
        RawParticipant {
            name: first_text(player, &self.selectors.name),
            hero: first_text(player, &self.selectors.hero),
            is_winner: player.value().classes().any(|class| class == WINNER_CLASS),
        }
    }
}

impl RoundFetcher for CoverageScraper {
    async fn fetch_round(&self, tournament: &TournamentRef, round: u32) -> Result<Vec<RawRow>> {
        let url = tournament.round_url(round);
        debug!("Fetching {}", url);

        let Some(body) = self.client.get_text(&url).await? else {
            return Ok(Vec::new());
        };

        let html = Html::parse_document(&body);
        Ok(self.parse_round_page(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> CoverageScraper {
        CoverageScraper::new(&ScraperSettings::default()).unwrap()
    }

    #[test]
    fn test_parses_results_rows() {
        let html = Html::parse_document(
            r#"
            <html><body>
              <div class="tournament-coverage__row tournament-coverage__row--results">
                <div class="tournament-coverage__player tournament-coverage__player--winner">
                  <span> Alice Smith </span>
                  <div class="tournament-coverage__player-hero-and-deck">Dorinthea Ironsong</div>
                </div>
                <div class="tournament-coverage__player">
                  <span>Bob Jones</span>
                  <div class="tournament-coverage__player-hero-and-deck">Katsu</div>
                </div>
              </div>
              <div class="tournament-coverage__row tournament-coverage__row--results">
                <div class="tournament-coverage__player">
                  <span>Carol</span>
                  <div class="tournament-coverage__player-hero-and-deck">Fai</div>
                </div>
                <div class="tournament-coverage__player">
                  <span>Dave</span>
                  <div class="tournament-coverage__player-hero-and-deck">Kano</div>
                </div>
              </div>
            </body></html>
            "#,
        );

        let rows = scraper().parse_round_page(&html);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            RawRow::new(vec![
                RawParticipant::new("Alice Smith", "Dorinthea Ironsong", true),
                RawParticipant::new("Bob Jones", "Katsu", false),
            ])
        );
        assert!(rows[1].participants.iter().all(|p| !p.is_winner));
    }

    #[test]
    fn test_missing_cells_are_none() {
        let html = Html::parse_document(
            r#"
            <div class="tournament-coverage__row--results">
              <div class="tournament-coverage__player"><span>Alice</span></div>
              <div class="tournament-coverage__player"><span></span></div>
            </div>
            "#,
        );

        let rows = scraper().parse_round_page(&html);

        assert_eq!(rows[0].participants[0].hero, None);
        assert_eq!(rows[0].participants[1].name, None);
    }

    #[test]
    fn test_page_without_rows_is_empty() {
        let html = Html::parse_document("<html><body><p>Round not started</p></body></html>");

        assert!(scraper().parse_round_page(&html).is_empty());
    }
}
