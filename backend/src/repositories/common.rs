//! Helpers shared by the repository modules.

/// Escapes LIKE/ILIKE metacharacters so a user-supplied search term is
/// matched literally.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds a case-insensitive substring pattern for ILIKE.
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
    }

    #[test]
    fn pattern_wraps_and_trims() {
        assert_eq!(like_pattern("  kar "), "%kar%");
    }
}
