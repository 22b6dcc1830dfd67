// src/logging.rs
// =============================================================================
// Sets up tracing so crawl progress streams to stderr as structured log lines.
//
// Which events are shown (highest priority first):
// 1. SUGGEST_CRAWLER_LOG env var (e.g. "suggest_crawler=debug")
// 2. RUST_LOG env var
// 3. CLI flags: -q -> warn, default -> info, -v -> debug
//
// stdout stays free for the final summary (or the JSON report).
// =============================================================================

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "SUGGEST_CRAWLER_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins if both flags are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. Call once, at the top of main.
///
/// Colors are used only when stderr is a terminal and `no_color` is false.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let use_ansi = !no_color && std::io::stderr().is_terminal();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(build_env_filter(verbosity));

    // Timestamps only when asked for detail; normal runs stay compact
    if verbosity == Verbosity::Verbose {
        registry
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .init();
    } else {
        registry.with(fmt_layer.without_time().compact()).init();
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    filter_from(
        verbosity,
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    )
}

// Unparseable directives fall through to the next source instead of failing
fn filter_from(
    verbosity: Verbosity,
    project: Option<String>,
    rust_log: Option<String>,
) -> EnvFilter {
    [project, rust_log]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.default_level().as_str()))
}
