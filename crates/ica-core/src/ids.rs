//! Record identifiers.

use uuid::Uuid;

/// Prefix for resume ids.
pub const RESUME_PREFIX: &str = "cv";
/// Prefix for application ids.
pub const APPLICATION_PREFIX: &str = "app";
/// Prefix for quiz attempt ids.
pub const ATTEMPT_PREFIX: &str = "quiz";

/// Generate a fresh id of the form `{prefix}-{uuid}` (v4, hyphenless).
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix() {
        let id = new_id(RESUME_PREFIX);
        assert!(id.starts_with("cv-"));
        assert_eq!(id.len(), "cv-".len() + 32);
    }

    #[test]
    fn ids_are_distinct() {
        let ids: std::collections::HashSet<_> = (0..500).map(|_| new_id("app")).collect();
        assert_eq!(ids.len(), 500);
    }
}
