//! Tagline collaborator with a fallback default.

/// Fallback used when no provider is configured
const DEFAULT_TAGLINE: &str = "scaffold-report: predictable folders, diffable artifacts";

/// Capability provider for the short descriptive string printed at startup.
///
/// Modeled as a trait with a default selected when no real provider is
/// configured, rather than a chain of best-effort lookups.
pub trait TaglineProvider {
    fn tagline(&self) -> String;
}

/// Provider backed by a fixed string
pub struct StaticTagline(pub String);

impl TaglineProvider for StaticTagline {
    fn tagline(&self) -> String {
        self.0.clone()
    }
}

/// Resolve the tagline from an optional provider, falling back to the default
pub fn resolve(provider: Option<&dyn TaglineProvider>) -> String {
    match provider {
        Some(p) => p.tagline(),
        None => DEFAULT_TAGLINE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_when_unconfigured() {
        assert_eq!(resolve(None), DEFAULT_TAGLINE);
    }

    #[test]
    fn test_configured_provider_wins() {
        let provider = StaticTagline("custom tagline".to_string());
        assert_eq!(resolve(Some(&provider)), "custom tagline");
    }
}
