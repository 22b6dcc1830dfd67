// src/crawl/depth.rs
// =============================================================================
// Depth policy: may a truncated prefix be expanded at its current depth?
//
// Every prefix below max_depth may expand. At or past max_depth only prefixes
// that match the deep prefix registry keep expanding. A match goes both ways:
//   "ta"    matches "tand"  (still growing towards the stem)
//   "tandar" matches "tand" (already grown past the stem)
// =============================================================================

/// Fixed set of stems whose prefix families ignore the depth limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepPrefixRegistry {
    tokens: Vec<String>,
}

impl DeepPrefixRegistry {
    pub fn new<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tokens: Vec<String> = tokens.into_iter().map(str::to_lowercase).collect();
        tokens.sort();
        tokens.dedup();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Bidirectional prefix containment against every registered stem.
    pub fn matches(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        self.tokens
            .iter()
            .any(|token| prefix.starts_with(token.as_str()) || token.starts_with(&prefix))
    }
}

#[derive(Debug, Clone)]
pub struct DepthPolicy {
    max_depth: usize,
    registry: DeepPrefixRegistry,
}

impl DepthPolicy {
    pub fn new(max_depth: usize, registry: DeepPrefixRegistry) -> Self {
        Self { max_depth, registry }
    }

    pub fn is_deep(&self, prefix: &str) -> bool {
        self.registry.matches(prefix)
    }

    pub fn may_expand(&self, prefix: &str, depth: usize) -> bool {
        depth < self.max_depth || self.is_deep(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> DepthPolicy {
        DepthPolicy::new(2, DeepPrefixRegistry::new(["tand", "oog"]))
    }

    #[test]
    fn test_shallow_prefixes_always_expand() {
        let policy = policy();
        assert!(policy.may_expand("x", 0));
        assert!(policy.may_expand("xy", 1));
    }

    #[test]
    fn test_depth_limit_applies_without_registry_match() {
        let policy = policy();
        assert!(!policy.may_expand("xyz", 2));
        assert!(!policy.may_expand("xyzw", 3));
    }

    #[test]
    fn test_stem_approaching_token_is_unlimited() {
        let policy = policy();
        assert!(policy.may_expand("tan", 2));
        assert!(policy.may_expand("oo", 5));
    }

    #[test]
    fn test_prefix_past_token_is_unlimited() {
        let policy = policy();
        assert!(policy.may_expand("tandarts", 7));
        assert!(policy.may_expand("oogarts", 6));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let registry = DeepPrefixRegistry::new(["Tand"]);
        assert!(registry.matches("TANDEN"));
        assert!(registry.matches("ta"));
        assert!(!registry.matches("tb"));
    }

    #[test]
    fn test_sibling_of_token_is_not_deep() {
        let policy = policy();
        assert!(!policy.is_deep("tane"));
        assert!(!policy.may_expand("tane", 3));
    }

    #[test]
    fn test_registry_dedups_tokens() {
        let registry = DeepPrefixRegistry::new(["oog", "OOG", "tand"]);
        assert_eq!(registry.tokens(), &["oog".to_string(), "tand".to_string()]);
    }
}
