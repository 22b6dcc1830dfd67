// src/fetch/mod.rs
// =============================================================================
// This module talks to the autocomplete endpoint.
//
// Submodules:
// - http: the reqwest-backed source and the error type for a failed fetch
// - paced: wraps any source with the pacing delay, optional retries, request
//   counting, and the "failure means zero results" rule
//
// The SuggestionSource trait is the seam between the crawler and the network.
// The crawler only ever sees a PacedFetcher, so tests swap in a stub source
// and never touch the network.
// =============================================================================

mod http;
mod paced;

use async_trait::async_trait;

pub use http::{FetchError, HttpSuggestionSource};
pub use paced::PacedFetcher;

/// Anything that can answer "which suggestions start with this prefix?"
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch(&self, prefix: &str) -> Result<Vec<String>, FetchError>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - It lets a trait have async methods that work behind generics and dyn
//    - Each call returns a boxed future under the hood
//
// 2. Why Send + Sync on the trait?
//    - The source lives inside the crawler across .await points, so the
//      compiler needs to know it can be shared safely
// -----------------------------------------------------------------------------
