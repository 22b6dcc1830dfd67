// src/fetch/paced.rs
// =============================================================================
// Polite, failure-tolerant fetching.
//
// Rules enforced here:
// 1. Before every fetch we sleep for the fixed pacing delay. There is only one
//    fetch in flight at a time, so this is a strict pace, not a concurrency cap.
// 2. A failed fetch may be retried (--retries), with a backoff that doubles on
//    each attempt. Every attempt counts as a request.
// 3. If the fetch still fails, the prefix has zero results. We log it and the
//    crawl moves on to the next sibling.
// =============================================================================

use std::time::Duration;

use tracing::{debug, warn};

use super::SuggestionSource;

const MIN_BACKOFF: Duration = Duration::from_millis(50);

pub struct PacedFetcher<S> {
    source: S,
    delay: Duration,
    retries: u32,
    requests: usize,
    failures: usize,
}

impl<S: SuggestionSource> PacedFetcher<S> {
    pub fn new(source: S, delay: Duration) -> Self {
        Self {
            source,
            delay,
            retries: 0,
            requests: 0,
            failures: 0,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Total HTTP attempts made, retries included.
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Prefixes whose fetch failed even after retrying.
    pub fn failures(&self) -> usize {
        self.failures
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the batch for `prefix`. Never fails: errors become an empty batch.
    pub async fn fetch(&mut self, prefix: &str) -> Vec<String> {
        tokio::time::sleep(self.delay).await;

        let mut attempt = 0;
        loop {
            self.requests += 1;
            match self.source.fetch(prefix).await {
                Ok(batch) => return batch,
                Err(e) if attempt < self.retries => {
                    let backoff = self.backoff(attempt);
                    debug!(prefix, attempt, error = %e, ?backoff, "fetch failed, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(prefix, error = %e, "failed to fetch suggestions, treating as empty");
                    self.failures += 1;
                    return Vec::new();
                }
            }
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.delay.max(MIN_BACKOFF);
        base.saturating_mul(2u32.saturating_pow(attempt))
    }
}
