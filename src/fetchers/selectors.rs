use anyhow::Result;
use scraper::{ElementRef, Selector};

pub(crate) fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid CSS selector {:?}: {}", css, e))
}

/// Text content with each fragment trimmed and blank fragments dropped
pub(crate) fn clean_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(clean_text)
        .filter(|text| !text.is_empty())
}
