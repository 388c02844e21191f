//! Greeting producer.
//!
//! # Design
//!
//! A total, pure function: every input (including the empty string) maps to
//! a greeting, and the result always carries the identity marker so callers
//! can tell which language rendition of the template produced it.

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Fixed substring identifying this rendition of the template.
pub const IDENTITY_MARKER: &str = "Rust";

/// Build the personalised greeting.
///
/// `None` falls back to [`DEFAULT_NAME`]. The result always contains
/// `Hello, <name>` and [`IDENTITY_MARKER`].
pub fn greeting(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("Hello, {name} from {IDENTITY_MARKER}! \u{1f680}")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_greeting_contains_name_and_marker() {
        let g = greeting(Some("Test"));
        assert!(g.contains("Hello, Test"));
        assert!(g.contains(IDENTITY_MARKER));
    }

    #[test]
    fn default_greeting_uses_placeholder() {
        assert!(greeting(None).contains(DEFAULT_NAME));
    }

    #[test]
    fn empty_name_is_a_valid_input() {
        let g = greeting(Some(""));
        assert!(g.contains("Hello, "));
        assert!(g.contains(IDENTITY_MARKER));
    }

    #[test]
    fn greeting_is_deterministic() {
        assert_eq!(greeting(Some("a")), greeting(Some("a")));
    }
}
