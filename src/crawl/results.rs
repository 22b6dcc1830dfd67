// src/crawl/results.rs
// =============================================================================
// The result set: every unique suggestion seen during one crawl run.
//
// Suggestions keep the case the endpoint returned, and two suggestions are the
// same only if the strings are exactly equal. Nothing is ever removed.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ResultSet {
    suggestions: HashSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every string in the batch. Returns how many were new.
    pub fn merge<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut added = 0;
        for item in batch {
            if self.suggestions.insert(item.into()) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// The suggestions in ascending order. Leaves the set untouched.
    pub fn sorted(&self) -> Vec<String> {
        let mut sorted: Vec<String> = self.suggestions.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    /// Consumes the set at the end of a run.
    pub fn finalize(self) -> Vec<String> {
        let mut sorted: Vec<String> = self.suggestions.into_iter().collect();
        sorted.sort();
        sorted
    }
}
