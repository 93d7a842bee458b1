//! Filter - Live search over member rows

use crate::domain::user::{UserColumn, UserRecord};

/// Case-insensitive substring query. Empty means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    raw: String,
    needle: String,
}

impl FilterQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// Text as typed into the search box
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when any displayed column contains the query
    pub fn matches(&self, user: &UserRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        UserColumn::ALL
            .into_iter()
            .any(|column| user.get(column).to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aaron() -> UserRecord {
        UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member")
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(FilterQuery::new("").is_empty());
        assert!(FilterQuery::new("").matches(&aaron()));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(FilterQuery::new("aaron").matches(&aaron()));
        assert!(FilterQuery::new("MILES").matches(&aaron()));
    }

    #[test]
    fn test_match_covers_email_and_role() {
        assert!(FilterQuery::new("mailinator").matches(&aaron()));
        assert!(FilterQuery::new("Memb").matches(&aaron()));
        assert!(!FilterQuery::new("admin").matches(&aaron()));
    }

    #[test]
    fn test_id_is_not_searched() {
        let user = UserRecord::new("42", "Bo", "bo@x.io", "member");
        assert!(!FilterQuery::new("42").matches(&user));
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let query = FilterQuery::new("n M");
        assert_eq!(query.as_str(), "n M");
        assert!(query.matches(&aaron()));
    }
}
