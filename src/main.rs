// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Validate the crawl config before a single request is made
// 3. Run the crawl (strictly sequential, paced requests)
// 4. Write the sorted suggestions to the output file and print a summary
// 5. Exit with proper code (0 = success, 2 = error)
//
// Nothing is written unless the crawl reaches the end, except checkpoints
// when --checkpoint-every is given.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod fetch;
mod logging;
mod output;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use cli::{Cli, Commands, CrawlArgs};
use crawl::{CrawlStats, DepthPolicy, Explorer};
use fetch::{HttpSuggestionSource, PacedFetcher};
use logging::Verbosity;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    match cli.command {
        Commands::Crawl(args) => handle_crawl(&args).await,
    }
}

/// Final report, printed as a summary block or as JSON with --json.
#[derive(Debug, Serialize)]
struct CrawlReport<'a> {
    total_unique: usize,
    output: &'a Path,
    #[serde(flatten)]
    stats: &'a CrawlStats,
}

async fn handle_crawl(args: &CrawlArgs) -> Result<i32> {
    let config = args.to_config();
    config.validate()?;

    let budget = config.budget();
    let registry = config.registry();

    info!(
        base_url = %config.base_url,
        max_results = budget.max_results,
        max_depth = budget.max_depth,
        delay_ms = config.delay_ms,
        "starting suggestion crawl"
    );
    info!(deep_prefixes = %registry.tokens().join(", "), "unlimited depth for");

    let source = HttpSuggestionSource::new(config.base_url.trim(), config.timeout())
        .context("building HTTP client")?;
    let fetcher = PacedFetcher::new(source, budget.delay).with_retries(config.retries);

    let mut explorer = Explorer::new(
        fetcher,
        budget,
        DepthPolicy::new(budget.max_depth, registry),
    );
    if let Some(every) = config.checkpoint_every {
        explorer = explorer.with_checkpoint(config.output.clone(), every);
    }

    let outcome = explorer.run().await;

    output::write_suggestions(&config.output, &outcome.suggestions)
        .with_context(|| format!("saving results to {}", config.output.display()))?;

    let report = CrawlReport {
        total_unique: outcome.suggestions.len(),
        output: &config.output,
        stats: &outcome.stats,
    };
    print_report(&report, args.json)?;

    Ok(0)
}

fn print_report(report: &CrawlReport<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let stats = report.stats;
    println!();
    println!("{}", "=".repeat(50));
    println!("Scraping complete!");
    println!("Total unique suggestions: {}", report.total_unique);
    println!("Total API requests: {}", stats.requests);
    println!("Failed requests: {}", stats.failed_fetches);
    println!("Depth-limited expansions: {}", stats.skipped_expansions);
    println!("Skipped prefix explorations: {}", stats.skipped_characters);
    println!("Duration: {:.1}s", stats.duration.as_secs_f64());
    println!("{}", "=".repeat(50));
    println!("Results saved to {}", report.output.display());

    Ok(())
}
