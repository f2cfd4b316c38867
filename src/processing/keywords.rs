//! Substring presence matching over fixed keyword lists

use crate::error::{Result, ResumeAnalyzerError};
use aho_corasick::{AhoCorasick, MatchKind};

/// A compiled keyword list answering "which of these occur anywhere in the text?"
///
/// Matching is literal substring containment on already-lowercased text, so a
/// keyword like `java` is present inside `javascript`. Overlapping search makes
/// every pattern that occurs anywhere report at least once.
pub struct KeywordSet {
    keywords: &'static [&'static str],
    automaton: AhoCorasick,
}

impl KeywordSet {
    pub fn new(keywords: &'static [&'static str]) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(keywords)
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self { keywords, automaton })
    }

    /// Presence flag per keyword, in list order
    pub fn presence(&self, haystack: &str) -> Vec<bool> {
        let mut seen = vec![false; self.keywords.len()];
        for m in self.automaton.find_overlapping_iter(haystack) {
            seen[m.pattern().as_usize()] = true;
        }
        seen
    }

    /// Number of distinct keywords present
    pub fn count_present(&self, haystack: &str) -> usize {
        self.presence(haystack).into_iter().filter(|hit| *hit).count()
    }

    /// Keywords absent from the text, in list order
    pub fn absent(&self, haystack: &str) -> Vec<&'static str> {
        self.keywords
            .iter()
            .zip(self.presence(haystack))
            .filter(|(_, hit)| !hit)
            .map(|(keyword, _)| *keyword)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_presence() {
        let set = KeywordSet::new(&["java", "javascript", "sql"]).unwrap();
        assert_eq!(set.presence("javascript developer"), vec![true, true, false]);
        assert_eq!(set.count_present("javascript developer"), 2);
        assert_eq!(set.absent("javascript developer"), vec!["sql"]);
    }

    #[test]
    fn test_repeated_hits_count_once() {
        let set = KeywordSet::new(&["led", "built"]).unwrap();
        assert_eq!(set.count_present("led led led the team"), 1);
    }

    #[test]
    fn test_short_keywords_inside_words() {
        let set = KeywordSet::new(&["c", "ip", "tcp/ip"]).unwrap();
        assert_eq!(set.presence("tcp/ip"), vec![true, true, true]);
        assert_eq!(set.count_present(""), 0);
    }
}
