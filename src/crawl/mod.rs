// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Respects same-host restriction (doesn't crawl external sites)
// - Depth, page-count, and per-request time budgets
// - Deduplicates videos across the whole crawl
// =============================================================================

mod queue;

// Re-export the crawl entry point, its options, and the default budgets
pub use queue::{crawl_site, CrawlOptions, MAX_DEPTH, MAX_PAGES, MAX_TIMEOUT_MS};
