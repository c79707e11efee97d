//! Substring filtering for the admin list views.

/// Case-insensitive substring match across a record's display fields.
/// An empty or whitespace-only query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|f| f.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("   ", &[]));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(matches_query("ALICE", &["alice@example.com", "Alice"]));
        assert!(matches_query("example.COM", &["alice@example.com"]));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_query("bob", &["alice@example.com", "Alice"]));
    }

    #[test]
    fn test_any_field_matches() {
        assert!(matches_query("smith", &["jane@corp.io", "Jane Smith"]));
    }
}
