// src/crawl/selector.rs
// =============================================================================
// Picks which one-letter extensions of a truncated prefix are worth probing.
//
// The endpoint returns results in alphabetical order and cuts them off at K.
// So for a full batch we can reason about the character that follows the
// prefix in each result:
// - Letters we saw: they have matches, explore them.
// - Letters before the first one we saw: they would have been listed first,
//   and they weren't, so they have no matches. Skip them.
// - Letters after the last one we saw: results there may have been cut off.
//   Explore them.
//
// If the batch tells us nothing (no letter follows the prefix in any result)
// we fall back to all 26 letters.
// =============================================================================

use std::collections::BTreeSet;

pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Returns the letters to append to `prefix`, in ascending order.
pub fn next_chars_to_explore(prefix: &str, batch: &[String]) -> Vec<char> {
    let prefix_lower = prefix.to_lowercase();

    // BTreeSet keeps the observed letters sorted for us
    let seen: BTreeSet<char> = batch
        .iter()
        .filter_map(|suggestion| {
            let lower = suggestion.to_lowercase();
            lower
                .strip_prefix(prefix_lower.as_str())
                .and_then(|rest| rest.chars().next())
        })
        .filter(char::is_ascii_lowercase)
        .collect();

    let Some(&last_seen) = seen.iter().next_back() else {
        return ALPHABET.to_vec();
    };

    seen.iter()
        .copied()
        .chain(ALPHABET.iter().copied().filter(|&c| c > last_seen))
        .collect()
}

/// How many letters an expansion left out.
pub fn skipped_count(chosen: &[char]) -> usize {
    ALPHABET.len().saturating_sub(chosen.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skips_gaps_and_keeps_tail() {
        let chosen = next_chars_to_explore("b", &batch(&["bank", "bed", "boot"]));

        let mut expected = vec!['a', 'e', 'o'];
        expected.extend('p'..='z');
        assert_eq!(chosen, expected);

        for skipped in ['b', 'c', 'd', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n'] {
            assert!(!chosen.contains(&skipped), "{skipped} should be skipped");
        }
        assert_eq!(skipped_count(&chosen), 12);
    }

    #[test]
    fn test_falls_back_to_full_alphabet() {
        let chosen = next_chars_to_explore("x", &batch(&["123", "#!"]));
        assert_eq!(chosen, ALPHABET.to_vec());
        assert_eq!(skipped_count(&chosen), 0);
    }

    #[test]
    fn test_ignores_non_alphabetic_next_chars() {
        // "ab 1" and "ab-x" continue with a space and a dash
        let chosen = next_chars_to_explore("ab", &batch(&["ab 1", "ab-x", "abx"]));
        assert_eq!(chosen, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_exact_match_contributes_nothing() {
        let chosen = next_chars_to_explore("oog", &batch(&["oog", "oogarts"]));
        let mut expected = vec!['a'];
        expected.extend('b'..='z');
        assert_eq!(chosen, expected);
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let chosen = next_chars_to_explore("Ta", &batch(&["TANDARTS", "tarwe", "Tas"]));
        assert_eq!(chosen, vec!['n', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z']);
    }

    #[test]
    fn test_results_without_prefix_are_ignored() {
        let chosen = next_chars_to_explore("mo", &batch(&["apple", "mond", "zebra"]));
        assert_eq!(chosen, vec!['n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z']);
    }

    #[test]
    fn test_last_letter_z_means_no_tail() {
        let chosen = next_chars_to_explore("a", &batch(&["ay", "az"]));
        assert_eq!(chosen, vec!['y', 'z']);
        assert_eq!(skipped_count(&chosen), 24);
    }
}
