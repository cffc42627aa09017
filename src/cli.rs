// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. Doc comments on fields become the --help
// text automatically.
// =============================================================================

use clap::Parser;

use crate::crawl;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "video-scout",
    version = "0.1.0",
    about = "A CLI tool to discover playable video files on a website",
    long_about = "video-scout crawls a website breadth-first, staying on the starting host, \
                  and lists every directly playable video file it finds along the way."
)]
pub struct Cli {
    /// Website URL to start crawling from (e.g., https://example.com)
    ///
    /// A bare hostname works too; https:// is assumed when no scheme is given
    pub url: String,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Maximum crawl depth (link hops from the starting page)
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + all pages it links to
    /// etc.
    #[arg(long, default_value_t = crawl::MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of pages to fetch before stopping
    #[arg(long, default_value_t = crawl::MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = crawl::MAX_TIMEOUT_MS)]
    pub timeout_ms: u64,
}
