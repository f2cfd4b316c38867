//! Keyword tokenization and frequency ranking

use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Words that carry no signal in resumes or job postings
const STOP_WORDS: &[&str] = &[
    "resume", "cv", "responsible", "responsibilities", "work", "worked",
    "using", "use", "ability", "skills", "experience", "project", "projects",
    "role", "team", "teams", "company", "companies",
];

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    token_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // Tokens start with a letter and may carry tech punctuation (c++, c#, next.js, tcp/ip)
        let token_regex = Regex::new(r"[a-zA-Z][a-zA-Z0-9+#./\-]+")
            .expect("Invalid token regex");

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            token_regex,
        }
    }

    /// Lowercase keyword tokens of at least 3 characters, stop words removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| token.chars().count() >= 3)
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Token frequencies in order of first appearance
    pub fn token_frequencies(&self, text: &str) -> Vec<(String, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for token in self.tokenize(text) {
            match index.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }

        counts
    }

    /// The `max_keywords` most frequent tokens; ties keep first-seen order
    pub fn top_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let mut ranked = self.token_frequencies(text);
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word)
            .collect()
    }
}
