// src/crawl/mod.rs
// =============================================================================
// This module rebuilds an autocomplete vocabulary by probing prefixes.
//
// Features:
// - Depth-first walk over prefixes, strictly one request at a time
// - Only expands a prefix when its batch hit the result limit
// - Skips letters the alphabetical order proves are absent
// - Depth limit, lifted for a registry of high-value stems
//
// Submodules:
// - explorer: the walk itself and the run statistics
// - selector: which letters to append to a truncated prefix
// - depth: the depth policy and deep prefix registry
// - results: the deduplicating result set
// =============================================================================

mod depth;
mod explorer;
mod results;
mod selector;

pub use depth::{DeepPrefixRegistry, DepthPolicy};
pub use explorer::{CrawlStats, Explorer};
