pub mod settings;

pub use settings::{
    AnalysisSettings, AppConfig, CacheSettings, CollectorSettings, DiscoverySettings,
    ExportSettings, ScraperSettings,
};
