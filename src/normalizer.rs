// src/normalizer.rs
// =============================================================================
// This module validates and canonicalizes the user-supplied starting address.
//
// What it does:
// - Trims surrounding whitespace
// - Assumes https:// when the input has no scheme at all
// - Rejects empty input, unparseable input, and non-http(s) schemes
//
// Everything downstream only ever sees a fully parsed Url.
// =============================================================================

use url::Url;

// Normalizes a raw address string into a crawlable URL
//
// Parameters:
//   raw: the address as typed by the user (may lack a scheme)
//
// Returns: Some(Url) for a valid http/https address, None otherwise
//
// Examples:
//   "example.com"       -> Some(https://example.com/)
//   "HTTP://a.com"      -> Some(http://a.com/)
//   "   "               -> None
//   "ftp://example.com" -> None
pub fn normalize(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Bare hostnames get the https:// default. Anything that already names
    // a scheme is parsed as-is so the scheme check below can reject it.
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://")
        || lower.starts_with("https://")
        || trimmed.contains("://")
    {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(_) => return None,
    };

    // Only http and https pages can be fetched
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}
