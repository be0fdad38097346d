//! Name keyword matching used by `find`.

use super::member::Member;

/// Matches members whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        NameContainsKeywords { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, member: &Member) -> bool {
        let words: Vec<String> = member
            .name()
            .as_str()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        self.keywords
            .iter()
            .any(|keyword| words.contains(&keyword.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::{Handle, Name, Room};
    use std::collections::BTreeSet;

    fn member(name: &str) -> Member {
        Member::new(
            Name::try_from(name).unwrap(),
            Handle::try_from("someone").unwrap(),
            Room::try_from("1-1").unwrap(),
            BTreeSet::new(),
        )
    }

    fn keywords(words: &[&str]) -> NameContainsKeywords {
        NameContainsKeywords::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_keywords_kept_in_order() {
        assert_eq!(keywords(&["Bob", "alice"]).keywords(), ["Bob", "alice"]);
    }

    #[test]
    fn test_matches_any_keyword_ignoring_case() {
        assert!(keywords(&["alice"]).matches(&member("Alice Bob")));
        assert!(keywords(&["carol", "BOB"]).matches(&member("Alice Bob")));
    }

    #[test]
    fn test_requires_whole_word() {
        assert!(!keywords(&["Ali"]).matches(&member("Alice Bob")));
        assert!(!keywords(&[]).matches(&member("Alice")));
    }
}
