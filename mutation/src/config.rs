//! Write-path configuration.

/// Configuration for the mutation pipeline.
///
/// Wildcard expansion requires an extra point-in-time read against live
/// storage per wildcard delete, so operators may turn it off. With
/// expansion disabled, wildcard-predicate deletes fail fast instead of
/// being expanded.
#[derive(Debug, Clone, Copy)]
pub struct MutationConfig {
    /// Whether predicate-wildcard deletes are expanded.
    pub expand_wildcards: bool,
}

impl MutationConfig {
    /// Create a config with the given expansion gate.
    pub fn new(expand_wildcards: bool) -> Self {
        Self { expand_wildcards }
    }
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            expand_wildcards: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_enabled_by_default() {
        assert!(MutationConfig::default().expand_wildcards);
        assert!(!MutationConfig::new(false).expand_wildcards);
    }
}
