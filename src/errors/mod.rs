use thiserror::Error;

/// Caller configuration errors raised when combining tournaments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombineError {
    #[error("Duplicate tournament label: {0}")]
    DuplicateLabel(String),

    #[error("Got {sequences} match sequences but {labels} tournament labels")]
    LabelCountMismatch { sequences: usize, labels: usize },
}

/// Context for fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context for cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

/// Context for export errors
pub fn export_context(table: &str) -> String {
    format!("Failed to export {}", table)
}
