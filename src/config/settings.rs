use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub max_round: u32,
    pub max_consecutive_empty: u32,
    pub concurrency: usize,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            max_round: 20,
            max_consecutive_empty: 1,
            concurrency: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: &'static str,
    pub organised_play_path: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 250, // 4 req/sec
            user_agent: "FabCoverageStats/0.1",
            timeout_secs: 10,
            base_url: "https://fabtcg.com",
            organised_play_path: "/en/organised-play/",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        let dir = std::env::var("CACHE_DIR").unwrap_or_else(|_| "cache".to_string());
        Self {
            enabled: true,
            dir: PathBuf::from(dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub write_json: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("fab_tournament_data"),
            write_json: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub polarized_threshold: f64,
    pub min_matches: u32,
    pub top_n: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            polarized_threshold: 60.0,
            min_matches: 5,
            top_n: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    pub format_filter: String,
    pub file_prefix: String,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            format_filter: "Classic Constructed".to_string(),
            file_prefix: "tournament_links".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub collector: CollectorSettings,
    pub scraper: ScraperSettings,
    pub cache: CacheSettings,
    pub export: ExportSettings,
    pub analysis: AnalysisSettings,
    pub discovery: DiscoverySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            collector: CollectorSettings::default(),
            scraper: ScraperSettings::default(),
            cache: CacheSettings::default(),
            export: ExportSettings::default(),
            analysis: AnalysisSettings::default(),
            discovery: DiscoverySettings::default(),
        }
    }
}
