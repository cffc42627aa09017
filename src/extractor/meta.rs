// src/extractor/meta.rs
// =============================================================================
// This module reads page-level metadata out of a parsed HTML document.
//
// Precedence:
// - title: og:title meta content, then <title> text, else empty
// - description: og:description meta content, then name="description"
//   meta content, else empty
// =============================================================================

use scraper::{Html, Selector};

// Extracts the page title
pub fn page_title(document: &Html) -> String {
    let og_title = meta_content(document, "meta[property=\"og:title\"]");
    if !og_title.is_empty() {
        return og_title;
    }

    // Selector::parse returns Result; this selector is a constant and
    // known to be valid
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

// Extracts the page description
pub fn page_description(document: &Html) -> String {
    let og_description = meta_content(document, "meta[property=\"og:description\"]");
    if !og_description.is_empty() {
        return og_description;
    }
    meta_content(document, "meta[name=\"description\"]")
}

// Returns the first non-empty content attribute matching the selector
fn meta_content(document: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .unwrap_or("")
        .to_string()
}
