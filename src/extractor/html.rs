// src/extractor/html.rs
// =============================================================================
// This module extracts video references and crawlable links from one page.
//
// How it works:
// 1. Parse the HTML (scraper tolerates malformed markup)
// 2. Read the page title and description for descriptor text
// 3. Every <video src> and nested <source src> becomes a video descriptor
// 4. Every <a href> is resolved; links ending in a known video extension
//    become descriptors too, and links staying on the allowed host become
//    crawl candidates - a single link can be both
//
// Unresolvable references are skipped one at a time; a broken fragment
// never aborts the rest of the page.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use super::descriptor::VideoDescriptor;
use super::meta;

// File extensions treated as directly playable video (lowercase)
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "m4v"];

// Everything extracted from a single page
#[derive(Debug)]
pub struct PageExtraction {
    /// Video descriptors in document order (not deduplicated here;
    /// cross-page dedup is the crawl engine's job)
    pub videos: Vec<VideoDescriptor>,
    /// Same-host links in first-appearance order, deduplicated per page
    pub next_links: Vec<Url>,
}

// Extracts videos and crawlable links from HTML content
//
// Parameters:
//   html: the page body to parse
//   page_url: the address the page was actually served from (after
//             redirects), used to resolve relative references
//   allowed_host: host component links must match to be crawled
pub fn extract_page(html: &str, page_url: &Url, allowed_host: &str) -> PageExtraction {
    let document = Html::parse_document(html);

    let title = meta::page_title(&document);
    let description = meta::page_description(&document);

    let mut videos = Vec::new();
    let mut next_links = Vec::new();
    // In-page dedup for next_links; first appearance keeps its position
    let mut queued = HashSet::new();

    // Direct video elements and their nested source variants
    // Selector::parse returns Result; these selectors are constants and
    // known to be valid
    let video_selector = Selector::parse("video[src], video source[src]").unwrap();
    for element in document.select(&video_selector) {
        if let Some(src) = element.value().attr("src") {
            if let Some(resolved) = resolve_url(page_url, src) {
                videos.push(VideoDescriptor::new(
                    &resolved,
                    page_url,
                    &title,
                    &description,
                ));
            }
        }
    }

    let anchor_selector = Selector::parse("a[href]").unwrap();
    for element in document.select(&anchor_selector) {
        let href = match element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        let resolved = match resolve_url(page_url, href) {
            Some(resolved) => resolved,
            None => continue,
        };

        // A link straight to a video file counts as a video wherever it
        // points, on-host or off
        if has_video_extension(&resolved) {
            videos.push(VideoDescriptor::new(
                &resolved,
                page_url,
                &title,
                &description,
            ));
        }

        // Independently, same-host pages are candidates for crawling
        if is_allowed_host(&resolved, allowed_host) && queued.insert(resolved.to_string()) {
            next_links.push(resolved);
        }
    }

    PageExtraction { videos, next_links }
}

// Resolves a possibly-relative reference to an absolute URL
//
// Parameters:
//   base: the current page
//   reference: the src/href value (might be relative, might be absolute)
//
// Returns: Some(url) or None if it cannot be resolved
fn resolve_url(base: &Url, reference: &str) -> Option<Url> {
    match Url::parse(reference) {
        Ok(url) => Some(url),
        Err(_) => base.join(reference).ok(),
    }
}

// Checks whether the URL path ends in a recognized video extension
//
// The comparison is case-insensitive and looks at the path only, so a
// query string like ?download=1 doesn't hide the extension
fn has_video_extension(url: &Url) -> bool {
    match url.path().rsplit_once('.') {
        Some((_, extension)) => VIDEO_EXTENSIONS
            .iter()
            .any(|candidate| extension.eq_ignore_ascii_case(candidate)),
        None => false,
    }
}

// Checks whether a link stays on the crawlable host
//
// Host comparison is exact string equality on the host component
fn is_allowed_host(url: &Url, allowed_host: &str) -> bool {
    (url.scheme() == "http" || url.scheme() == "https") && url.host_str() == Some(allowed_host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn urls(links: &[Url]) -> Vec<String> {
        links.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_video_src_extracted() {
        let html = r#"<video src="/v/1.mp4"></video>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].video_url, "https://h.example/v/1.mp4");
        assert_eq!(result.videos[0].page_url, "https://h.example/");
    }

    #[test]
    fn test_nested_source_elements_extracted() {
        let html = r#"
            <video>
                <source src="clip.webm">
                <source src="clip.mp4">
            </video>
        "#;
        let result = extract_page(html, &page("https://h.example/watch/"), "h.example");
        assert_eq!(result.videos.len(), 2);
        assert_eq!(result.videos[0].video_url, "https://h.example/watch/clip.webm");
        assert_eq!(result.videos[1].video_url, "https://h.example/watch/clip.mp4");
    }

    #[test]
    fn test_anchor_with_video_extension_is_a_video() {
        let html = r#"<a href="/downloads/movie.M4V">movie</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].filename, "movie.M4V");
    }

    #[test]
    fn test_query_string_does_not_hide_extension() {
        let html = r#"<a href="/v/clip.mp4?download=1">clip</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].filename, "clip.mp4");
    }

    #[test]
    fn test_off_host_video_link_still_counts() {
        let html = r#"<a href="http://other.example/clip.mp4">clip</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].video_url, "http://other.example/clip.mp4");
        // The off-host page itself is never a crawl candidate
        assert!(result.next_links.is_empty());
    }

    #[test]
    fn test_same_host_links_collected_in_order() {
        let html = r#"
            <a href="/b">b</a>
            <a href="/a">a</a>
            <a href="/b">b again</a>
        "#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(
            urls(&result.next_links),
            vec!["https://h.example/b", "https://h.example/a"]
        );
    }

    #[test]
    fn test_off_host_page_link_ignored() {
        let html = r#"<a href="https://other.example/page.html">elsewhere</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert!(result.videos.is_empty());
        assert!(result.next_links.is_empty());
    }

    #[test]
    fn test_subdomain_is_a_different_host() {
        let html = r#"<a href="https://www.h.example/page">www</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert!(result.next_links.is_empty());
    }

    #[test]
    fn test_non_http_links_ignored() {
        let html = r#"
            <a href="mailto:someone@h.example">mail</a>
            <a href="javascript:void(0)">js</a>
        "#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert!(result.videos.is_empty());
        assert!(result.next_links.is_empty());
    }

    #[test]
    fn test_same_host_video_link_lands_in_both_lists() {
        let html = r#"<a href="/v/clip.mp4">clip</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
        assert_eq!(urls(&result.next_links), vec!["https://h.example/v/clip.mp4"]);
    }

    #[test]
    fn test_page_metadata_flows_into_descriptors() {
        let html = r#"
            <head>
                <meta property="og:title" content="Clips">
                <meta name="description" content="All the clips">
            </head>
            <body><video src="/v/1.mp4"></video></body>
        "#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos[0].page_title, "Clips");
        assert_eq!(result.videos[0].description, "All the clips");
    }

    #[test]
    fn test_duplicate_videos_on_one_page_not_deduplicated_here() {
        let html = r#"
            <video src="/v/1.mp4"></video>
            <a href="/v/1.mp4">same clip</a>
        "#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 2);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let html = "<video src='/v/1.mp4'><<div><a href='/next' <p>";
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert_eq!(result.videos.len(), 1);
    }

    #[test]
    fn test_garbage_input_yields_nothing() {
        let result = extract_page("%%% not html at all %%%", &page("https://h.example/"), "h.example");
        assert!(result.videos.is_empty());
        assert!(result.next_links.is_empty());
    }

    #[test]
    fn test_extension_match_requires_final_segment() {
        // A dot earlier in the path is not an extension
        let html = r#"<a href="/v1.mp4/index.html">page</a>"#;
        let result = extract_page(html, &page("https://h.example/"), "h.example");
        assert!(result.videos.is_empty());
    }
}
