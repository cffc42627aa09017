// src/extractor/descriptor.rs
// =============================================================================
// This module defines the output record of the whole tool: one discovered
// video resource together with its provenance.
//
// Fallback rules for the display text:
// - title: page title, else the video's filename, else a fixed placeholder
// - description: page description, else the filename, else a placeholder
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder title when neither the page nor the URL offers one
pub const UNTITLED_PAGE: &str = "Untitled page";

/// Placeholder description when neither the page nor the URL offers one
pub const NO_DESCRIPTION: &str = "No description available";

// Describes one playable video found during a crawl
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
// Immutable once built; video_url is the unique key within a crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDescriptor {
    /// Absolute URL of the video resource itself
    pub video_url: String,
    /// Absolute URL of the page where the video was found
    pub page_url: String,
    /// Title of the page (or a fallback)
    pub page_title: String,
    /// Description of the page (or a fallback)
    pub description: String,
    /// Last path segment of the video URL, without query or fragment
    pub filename: String,
}

impl VideoDescriptor {
    // Builds a descriptor for one resolved video reference
    //
    // Parameters:
    //   video_url: fully resolved address of the video resource
    //   page_url: address of the page the reference was found on
    //   page_title: page-level title (may be empty)
    //   page_description: page-level description (may be empty)
    pub fn new(video_url: &Url, page_url: &Url, page_title: &str, page_description: &str) -> Self {
        let filename = filename_from_url(video_url);

        let title = if !page_title.is_empty() {
            page_title.to_string()
        } else if !filename.is_empty() {
            filename.clone()
        } else {
            UNTITLED_PAGE.to_string()
        };

        let description = if !page_description.is_empty() {
            page_description.to_string()
        } else if !filename.is_empty() {
            filename.clone()
        } else {
            NO_DESCRIPTION.to_string()
        };

        Self {
            video_url: video_url.to_string(),
            page_url: page_url.to_string(),
            page_title: title,
            description,
            filename,
        }
    }
}

// Derives a display filename from a video URL
//
// Takes the last non-empty path segment; the query string and fragment are
// not part of the path, so they never leak into the name.
//
// Examples:
//   https://h/v/clip.mp4?dl=1 -> "clip.mp4"
//   https://h/                -> ""
fn filename_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("")
        .to_string()
}
