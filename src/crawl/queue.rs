// src/crawl/queue.rs
// =============================================================================
// This module implements the breadth-first video discovery crawl.
//
// How it works:
// 1. Start with the normalized URL in a queue at depth 0
// 2. Dequeue the head; skip it if already processed or too deep
// 3. Fetch the page; a failed fetch contributes nothing
// 4. Extract videos (deduplicated globally by video URL) and same-host
//    links (queued one hop deeper)
// 5. Repeat until the queue is empty or the page budget is spent
//
// Failure policy:
// - Per-page failures (timeout, network error, error status, unparseable
//   markup) are absorbed; the crawl always moves on to the next page
// - Only failing to construct the HTTP client surfaces as an error
//
// Rust concepts:
// - HashSet: To track visited pages and seen videos (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// =============================================================================

use anyhow::Result;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

use crate::extractor::{self, VideoDescriptor};
use crate::fetcher;

/// Most pages fetched in one crawl
pub const MAX_PAGES: usize = 60;

/// Most link hops followed from the starting page
pub const MAX_DEPTH: usize = 3;

/// Hard per-request timeout in milliseconds
pub const MAX_TIMEOUT_MS: u64 = 10_000;

// Budgets for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub max_pages: usize,
    pub max_depth: usize,
    pub timeout_ms: u64,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
            max_depth: MAX_DEPTH,
            timeout_ms: MAX_TIMEOUT_MS,
        }
    }
}

// Represents a page in the crawl queue
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    depth: usize, // How many link hops from the starting page
}

// All state for one crawl invocation: the queue, the dedup sets, the
// result accumulator, and the page counter
//
// Owned exclusively by the crawl loop and discarded when it ends; only
// the results survive
struct CrawlState {
    queue: VecDeque<CrawlItem>,
    visited: HashSet<String>,
    seen_videos: HashSet<String>,
    results: Vec<VideoDescriptor>,
    pages_processed: usize,
}

impl CrawlState {
    fn new(start: &Url) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(CrawlItem {
            url: start.to_string(),
            depth: 0,
        });

        Self {
            queue,
            visited: HashSet::new(),
            seen_videos: HashSet::new(),
            results: Vec::new(),
            pages_processed: 0,
        }
    }

    // Decides whether a dequeued entry still needs processing, and marks
    // it visited when it does
    //
    // Entries already processed or beyond the depth budget are dropped
    fn admit(&mut self, item: &CrawlItem, max_depth: usize) -> bool {
        if self.visited.contains(&item.url) || item.depth > max_depth {
            return false;
        }
        self.visited.insert(item.url.clone());
        true
    }

    // Appends every not-yet-seen video, preserving discovery order
    //
    // The first page to mention a video URL owns its descriptor; later
    // mentions are dropped
    fn record_videos(&mut self, videos: Vec<VideoDescriptor>) {
        for video in videos {
            if self.seen_videos.insert(video.video_url.clone()) {
                self.results.push(video);
            }
        }
    }

    // Queues every link not yet processed, one hop deeper than its parent
    //
    // A link reachable from several parents can sit in the queue more than
    // once; the visited check at dequeue time keeps it from being
    // processed twice
    fn enqueue_links(&mut self, links: Vec<Url>, parent_depth: usize) {
        for link in links {
            let url = link.to_string();
            if !self.visited.contains(&url) {
                self.queue.push_back(CrawlItem {
                    url,
                    depth: parent_depth + 1,
                });
            }
        }
    }
}

// Crawls a website starting from a normalized URL and collects every
// playable video discovered along the way
//
// Parameters:
//   start: the starting address (see normalizer::normalize)
//   options: page, depth, and per-request time budgets
//
// Returns: Vec of VideoDescriptor in discovery order, one per distinct
// video URL
pub async fn crawl_site(start: &Url, options: &CrawlOptions) -> Result<Vec<VideoDescriptor>> {
    // Links are only followed when they stay on this host
    let allowed_host = start.host_str().unwrap_or_default().to_string();

    // One client for the whole crawl; it carries the per-request timeout
    let client = fetcher::build_client(Duration::from_millis(options.timeout_ms))?;

    let mut state = CrawlState::new(start);

    // Process the queue until empty or the page budget is spent
    while let Some(item) = state.queue.pop_front() {
        if state.pages_processed >= options.max_pages {
            break;
        }

        if !state.admit(&item, options.max_depth) {
            continue;
        }

        println!("  Crawling [depth {}]: {}", item.depth, item.url);

        let page = match fetcher::fetch_page(&client, &item.url).await {
            Some(page) => page,
            None => {
                eprintln!("  Warning: failed to fetch {}", item.url);
                continue;
            }
        };
        if !page.ok {
            eprintln!("  Warning: skipping {} (error status)", item.url);
            continue;
        }

        state.pages_processed += 1;

        // Resolve relative references against where the request actually
        // landed, not against the address we asked for
        let extraction = extractor::extract_page(&page.body, &page.final_url, &allowed_host);

        state.record_videos(extraction.videos);
        state.enqueue_links(extraction.next_links, item.depth);
    }

    Ok(state.results)
}
