// src/crawl/explorer.rs
// =============================================================================
// The frontier explorer: walks prefix space depth-first, one fetch at a time.
//
// How it works:
// 1. Start with every single letter "a".."z" (depth 0), then the empty prefix
// 2. Fetch the batch for a prefix and merge it into the result set
// 3. Fewer than K results? The endpoint gave us everything. Leaf, done.
// 4. K results? The list may have been cut off, so expand:
//    - the depth policy says whether this prefix may still grow
//    - the selector says which letters are worth appending
// 5. Children are visited in alphabetical order, and a child's whole subtree
//    finishes before its next sibling starts
//
// Each step makes the prefix one character longer, so the walk is a finite
// tree and no prefix is ever fetched twice. The empty prefix is fetched once to
// catch default suggestions and is never expanded.
// =============================================================================

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::depth::DepthPolicy;
use super::results::ResultSet;
use super::selector::{next_chars_to_explore, skipped_count, ALPHABET};
use crate::config::ExplorationBudget;
use crate::fetch::{PacedFetcher, SuggestionSource};
use crate::output;

// A prefix waiting on the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefixNode {
    prefix: String,
    depth: usize, // 0 for the single-letter roots
}

/// Counters for one crawl run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    /// HTTP attempts, retries included.
    pub requests: usize,
    /// Prefixes whose fetch failed and were treated as empty.
    pub failed_fetches: usize,
    pub visited_prefixes: usize,
    /// Truncated prefixes left unexpanded because of the depth limit.
    pub skipped_expansions: usize,
    /// Letters left out by the selector, summed over all expansions.
    pub skipped_characters: usize,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    pub duration: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// What a finished crawl hands back.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub suggestions: Vec<String>,
    pub stats: CrawlStats,
}

// Periodic dump of the result set while the crawl is still running
#[derive(Debug, Clone)]
struct Checkpoint {
    path: PathBuf,
    every: usize,
}

pub struct Explorer<S> {
    fetcher: PacedFetcher<S>,
    budget: ExplorationBudget,
    policy: DepthPolicy,
    results: ResultSet,
    stats: CrawlStats,
    checkpoint: Option<Checkpoint>,
}

impl<S: SuggestionSource> Explorer<S> {
    pub fn new(fetcher: PacedFetcher<S>, budget: ExplorationBudget, policy: DepthPolicy) -> Self {
        Self {
            fetcher,
            budget,
            policy,
            results: ResultSet::new(),
            stats: CrawlStats::default(),
            checkpoint: None,
        }
    }

    /// Writes the sorted result set to `path` after every `every` visited prefixes.
    pub fn with_checkpoint(mut self, path: PathBuf, every: usize) -> Self {
        self.checkpoint = Some(Checkpoint {
            path,
            every: every.max(1),
        });
        self
    }

    /// Runs the whole crawl: every letter, then the empty prefix.
    pub async fn run(mut self) -> CrawlOutcome {
        let started = Instant::now();

        for c in ALPHABET {
            self.explore(c.to_string(), 0).await;
        }
        self.explore(String::new(), 0).await;

        self.stats.requests = self.fetcher.requests();
        self.stats.failed_fetches = self.fetcher.failures();
        self.stats.duration = started.elapsed();

        CrawlOutcome {
            suggestions: self.results.finalize(),
            stats: self.stats,
        }
    }

    /// Explores `prefix` and its whole subtree before returning.
    pub async fn explore(&mut self, prefix: String, depth: usize) {
        // A stack gives the same visiting order as recursion: push children
        // in reverse so the alphabetically first one is popped next
        let mut frontier = vec![PrefixNode { prefix, depth }];

        while let Some(node) = frontier.pop() {
            let children = self.visit(&node).await;
            frontier.extend(children.into_iter().rev());
        }
    }

    // Fetches one prefix and decides which children (if any) to explore
    async fn visit(&mut self, node: &PrefixNode) -> Vec<PrefixNode> {
        let PrefixNode { prefix, depth } = node;
        let depth = *depth;

        let batch = self.fetcher.fetch(prefix).await;
        self.results.merge(batch.iter().map(String::as_str));
        self.stats.visited_prefixes += 1;

        info!(
            prefix = %prefix,
            depth,
            batch = batch.len(),
            unique = self.results.len(),
            "explored prefix"
        );

        self.maybe_checkpoint();

        // Primary termination: the endpoint returned its complete list
        if batch.len() < self.budget.max_results {
            return Vec::new();
        }

        if prefix.is_empty() {
            debug!("empty prefix hit the result limit; it is never expanded");
            return Vec::new();
        }

        let deep = self.policy.is_deep(prefix);
        if !self.policy.may_expand(prefix, depth) {
            self.stats.skipped_expansions += 1;
            info!(
                prefix = %prefix,
                depth,
                max_depth = self.budget.max_depth,
                "hit result limit at depth limit, not expanding"
            );
            return Vec::new();
        }

        let chars = next_chars_to_explore(prefix, &batch);
        let skipped = skipped_count(&chars);
        self.stats.skipped_characters += skipped;

        info!(
            prefix = %prefix,
            depth,
            explore = %chars.iter().collect::<String>(),
            skipped,
            deep,
            "hit result limit, expanding"
        );

        chars
            .into_iter()
            .map(|c| PrefixNode {
                prefix: format!("{prefix}{c}"),
                depth: depth + 1,
            })
            .collect()
    }

    fn maybe_checkpoint(&self) {
        let Some(checkpoint) = &self.checkpoint else {
            return;
        };
        // Nothing found yet; don't clobber an earlier run's output with []
        if self.results.is_empty() || self.stats.visited_prefixes % checkpoint.every != 0 {
            return;
        }

        match output::write_suggestions(&checkpoint.path, &self.results.sorted()) {
            Ok(()) => debug!(
                path = %checkpoint.path.display(),
                unique = self.results.len(),
                "checkpoint written"
            ),
            Err(e) => warn!(path = %checkpoint.path.display(), error = %e, "checkpoint failed"),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec as the frontier instead of recursion?
//    - An async fn can't call itself without boxing its future
//    - A stack (push/pop at the end) visits nodes in exactly the order a
//      recursive depth-first walk would
//    - Rule of thumb: VecDeque for breadth-first, Vec for depth-first
//
// 2. Why is Explorer generic over S?
//    - S is whatever answers prefix queries (the HTTP client in main, a stub
//      in the tests below)
//    - The crawler never knows which one it has
//
// 3. Why no Mutex around the result set?
//    - Only one fetch is ever in flight, and everything runs on one call chain
//    - &mut self is all the synchronization we need
// -----------------------------------------------------------------------------
