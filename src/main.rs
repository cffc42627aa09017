// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate and normalize the starting address
// 3. Run the crawl and collect video descriptors
// 4. Print them as a table or JSON
// 5. Exit with proper code (0 = videos found, 1 = none found, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - breadth-first crawl engine
mod extractor; // src/extractor/ - page parsing and descriptors
mod fetcher; // src/fetcher.rs - HTTP page fetching
mod normalizer; // src/normalizer.rs - starting address validation

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use crawl::CrawlOptions;
use extractor::VideoDescriptor;

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = at least one video found
//   Ok(1) = crawl finished without finding any videos
//   Ok(2) = invalid starting address
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Reject bad input before any crawling starts
    let start = match normalizer::normalize(&cli.url) {
        Some(url) => url,
        None => {
            eprintln!("Error: '{}' is not a valid http(s) address", cli.url);
            return Ok(2);
        }
    };

    println!("🔍 Scanning website: {}", start);
    println!("📊 Max depth: {} | Max pages: {}", cli.max_depth, cli.max_pages);

    let options = CrawlOptions {
        max_pages: cli.max_pages,
        max_depth: cli.max_depth,
        timeout_ms: cli.timeout_ms,
    };

    let videos = crawl::crawl_site(&start, &options).await?;

    if videos.is_empty() {
        println!("⚠️  No playable videos found");
        return Ok(1);
    }

    println!("\n🎬 Found {} video(s)\n", videos.len());

    print_results(&videos, cli.json)?;

    Ok(0)
}

// Prints the results either as a table or JSON
// Parameters:
//   videos: slice of VideoDescriptor structs
//   json: whether to output JSON format
fn print_results(videos: &[VideoDescriptor], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(videos)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(videos);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(videos: &[VideoDescriptor]) {
    // Print table header
    println!("{:<32} {:<58} {:<40}", "FILENAME", "VIDEO URL", "FOUND ON");
    println!("{}", "=".repeat(130));

    // Print each result
    for video in videos {
        println!(
            "{:<32} {:<58} {:<40}",
            truncate(&video.filename, 29),
            truncate(&video.video_url, 55),
            truncate(&video.page_url, 37)
        );
    }

    println!();

    // Print summary
    println!("📊 Summary:");
    println!("   🎬 Videos: {}", videos.len());
}

// Truncates a string for table display, marking the cut with '...'
fn truncate(text: &str, max: usize) -> String {
    if text.len() > max {
        format!("{}...", &text[..max])
    } else {
        text.to_string()
    }
}
