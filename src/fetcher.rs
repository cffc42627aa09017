// src/fetcher.rs
// =============================================================================
// This module fetches web pages over HTTP(S).
//
// Key behavior:
// - One GET request per call, no retries
// - A hard per-request timeout (carried by the shared client); a request
//   still in flight when it elapses is cancelled
// - Every network-level failure (DNS, refused connection, TLS, timeout)
//   is swallowed and reported as None - the crawl decides what a missing
//   page means, this module never aborts anything
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

// A fetched page: where the request finally landed after redirects,
// whether the server answered with a success status, and the body text
// (left empty when the status was not ok - callers never read it then)
#[derive(Debug)]
pub struct FetchedPage {
    pub final_url: Url,
    pub ok: bool,
    pub body: String,
}

// Builds the HTTP client shared by every request in one crawl
//
// Parameters:
//   timeout: hard limit for each individual request
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}

// Fetches a single page
//
// Parameters:
//   client: shared HTTP client (carries the timeout)
//   url: absolute address to fetch
//
// Returns: Some(FetchedPage) when the server answered, None on any
// network-level failure. Redirects are followed by the client; final_url
// records where the response actually came from.
pub async fn fetch_page(client: &Client, url: &str) -> Option<FetchedPage> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(_) => return None,
    };

    let final_url = response.url().clone();
    let ok = response.status().is_success();

    // No point downloading the body of an error response
    if !ok {
        return Some(FetchedPage {
            final_url,
            ok,
            body: String::new(),
        });
    }

    match response.text().await {
        Ok(body) => Some(FetchedPage {
            final_url,
            ok,
            body,
        }),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_succeeds() {
        assert!(build_client(Duration::from_millis(10_000)).is_ok());
    }
}
