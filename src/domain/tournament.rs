use anyhow::{Context, Result};
use regex::Regex;

const COVERAGE_URL_PATTERN: &str = r"^https://fabtcg\.com/en/coverage/([^/?#]+)/results/?$";

/// A tournament's coverage results page, e.g.
/// `https://fabtcg.com/en/coverage/calling-bologna-2025/results/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TournamentRef {
    results_url: String,
    slug: String,
}

impl TournamentRef {
    /// Validate a results URL. A missing trailing slash is added.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = url.trim();
        let pattern = Regex::new(COVERAGE_URL_PATTERN)
            .context("Failed to compile coverage URL regex")?;

        let Some(captures) = pattern.captures(url) else {
            anyhow::bail!(
                "Invalid tournament URL: {} (expected https://fabtcg.com/en/coverage/<event>/results/)",
                url
            );
        };

        let slug = captures[1].to_string();
        let results_url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{}/", url)
        };

        Ok(Self { results_url, slug })
    }

    pub fn results_url(&self) -> &str {
        &self.results_url
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn round_url(&self, round: u32) -> String {
        format!("{}{}/", self.results_url, round)
    }

    /// Human readable name derived from the slug: `calling-bologna-2025` → `Calling Bologna 2025`
    pub fn display_name(&self) -> String {
        self.slug
            .split('-')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_results_url() {
        let tournament =
            TournamentRef::from_url("https://fabtcg.com/en/coverage/calling-bologna-2025/results/")
                .unwrap();

        assert_eq!(tournament.slug(), "calling-bologna-2025");
        assert_eq!(tournament.display_name(), "Calling Bologna 2025");
        assert_eq!(
            tournament.round_url(3),
            "https://fabtcg.com/en/coverage/calling-bologna-2025/results/3/"
        );
    }

    #[test]
    fn test_appends_missing_trailing_slash() {
        let tournament =
            TournamentRef::from_url("https://fabtcg.com/en/coverage/pro-tour-lille/results")
                .unwrap();

        assert_eq!(
            tournament.results_url(),
            "https://fabtcg.com/en/coverage/pro-tour-lille/results/"
        );
    }

    #[test]
    fn test_rejects_foreign_urls() {
        assert!(TournamentRef::from_url("https://example.com/en/coverage/x/results/").is_err());
        assert!(TournamentRef::from_url("https://fabtcg.com/en/coverage/x/standings/").is_err());
    }
}
