// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every crawl knob has a default matching the values the crawler was tuned
// with (8 results per query, depth 2, 100ms between requests, the medical
// deep prefixes), so a plain `suggest-crawler crawl` with BASE_URL set does
// the standard run.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    CrawlConfig, DEFAULT_DEEP_PREFIXES, DEFAULT_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS,
    DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(
    name = "suggest-crawler",
    version,
    about = "Rebuild the full vocabulary of an autocomplete API by probing prefixes",
    long_about = "suggest-crawler queries an autocomplete endpoint that returns at most K results \
                  per prefix. It drills into longer prefixes only where a result list was cut off, \
                  and writes every suggestion it finds to a sorted JSON array."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output (every retry, checkpoint, and skipped expansion)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never color log output, even on a terminal
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl the endpoint and write the sorted suggestion list
    ///
    /// Example: suggest-crawler crawl --base-url "https://api.example.com/suggest?q="
    Crawl(CrawlArgs),
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Endpoint prefix; the URL-encoded query prefix is appended to it as-is
    #[arg(long, env = "BASE_URL")]
    pub base_url: String,

    /// Where to write the JSON array of suggestions
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Most results the endpoint returns for one prefix (K)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// How many letters a truncated prefix may grow by, outside deep prefixes
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Pause before every request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Stem exempt from the depth limit (repeat the flag for more)
    ///
    /// Giving this flag replaces the built-in list.
    #[arg(long = "deep-prefix", value_name = "STEM")]
    pub deep_prefixes: Vec<String>,

    /// Extra attempts for a failed request before treating it as empty
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Also write the output file after every N visited prefixes
    #[arg(long, value_name = "N")]
    pub checkpoint_every: Option<usize>,

    /// Print the final report as JSON instead of a summary block
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    pub fn to_config(&self) -> CrawlConfig {
        let deep_prefixes = if self.deep_prefixes.is_empty() {
            DEFAULT_DEEP_PREFIXES.iter().map(|s| s.to_string()).collect()
        } else {
            self.deep_prefixes.clone()
        };

        CrawlConfig {
            output: self.output.clone(),
            max_results: self.max_results,
            max_depth: self.max_depth,
            delay_ms: self.delay_ms,
            deep_prefixes,
            retries: self.retries,
            timeout_secs: self.timeout_secs,
            checkpoint_every: self.checkpoint_every,
            ..CrawlConfig::with_base_url(self.base_url.clone())
        }
    }
}
