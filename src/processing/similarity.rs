//! TF-IDF document similarity and job keyword overlap

use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Matched and missing lists are each capped at this length
pub const OVERLAP_CAP: usize = 25;

/// Common English function words, dropped before n-grams are formed
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Unigram + bigram TF-IDF model over a pair of documents
pub struct SimilarityEngine {
    word_regex: Regex,
    stop_words: HashSet<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordOverlap {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordOverlap {
    /// Share of inspected job keywords found in the resume
    pub fn ratio(&self) -> f64 {
        let total = (self.matched.len() + self.missing.len()).max(1);
        self.matched.len() as f64 / total as f64
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\b\w\w+\b").expect("Invalid word regex");

        Self {
            word_regex,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Cosine similarity of the TF-IDF vectors of both documents, in [0, 1]
    pub fn similarity(&self, resume_text: &str, jd_text: &str) -> f64 {
        let resume_terms = self.term_counts(resume_text);
        let jd_terms = self.term_counts(jd_text);

        if resume_terms.is_empty() || jd_terms.is_empty() {
            return 0.0;
        }

        let n_docs = 2.0_f64;
        let idf = |term: &str| {
            let df = [&resume_terms, &jd_terms]
                .iter()
                .filter(|doc| doc.contains_key(term))
                .count() as f64;
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        };

        let resume_vec = weigh(&resume_terms, &idf);
        let jd_vec = weigh(&jd_terms, &idf);

        let dot: f64 = resume_vec
            .iter()
            .filter_map(|(term, weight)| jd_vec.get(term).map(|other| weight * other))
            .sum();
        let norm_resume = resume_vec.values().map(|w| w * w).sum::<f64>().sqrt();
        let norm_jd = jd_vec.values().map(|w| w * w).sum::<f64>().sqrt();

        if norm_resume == 0.0 || norm_jd == 0.0 {
            0.0
        } else {
            (dot / (norm_resume * norm_jd)).clamp(0.0, 1.0)
        }
    }

    /// Top job keywords partitioned by literal substring presence in the resume
    pub fn keyword_overlap(
        &self,
        processor: &TextProcessor,
        resume_text: &str,
        jd_text: &str,
        top_n: usize,
    ) -> KeywordOverlap {
        let resume_lower = resume_text.to_lowercase();
        let (mut matched, mut missing): (Vec<String>, Vec<String>) = processor
            .top_keywords(jd_text, top_n)
            .into_iter()
            .partition(|keyword| resume_lower.contains(keyword.as_str()));

        matched.truncate(OVERLAP_CAP);
        missing.truncate(OVERLAP_CAP);

        KeywordOverlap { matched, missing }
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = self
            .word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !self.stop_words.contains(w))
            .collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in &words {
            *counts.entry((*word).to_string()).or_insert(0) += 1;
        }
        for pair in words.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }

        counts
    }
}

fn weigh<'a>(counts: &'a HashMap<String, usize>, idf: &dyn Fn(&str) -> f64) -> HashMap<&'a str, f64> {
    counts
        .iter()
        .map(|(term, &count)| (term.as_str(), count as f64 * idf(term)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let engine = SimilarityEngine::new();
        let text = "Rust developer building distributed storage engines";
        let score = engine.similarity(text, text);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents() {
        let engine = SimilarityEngine::new();
        let score = engine.similarity("kubernetes docker terraform", "watercolor painting portraits");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_shared_bigram_cosine_value() {
        let engine = SimilarityEngine::new();
        // shared: "rust", "developer", "rust developer" (idf 1)
        // one-sided: "mentor"/"wanted" and their bigrams (idf ln(1.5) + 1)
        let score = engine.similarity("rust developer mentor", "rust developer wanted");

        let rare = 1.5_f64.ln() + 1.0;
        let expected = 3.0 / (3.0 + 2.0 * rare * rare);
        assert!((expected - 0.431613).abs() < 1e-6);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let engine = SimilarityEngine::new();
        let score = engine.similarity(
            "Python developer with SQL and pandas experience",
            "Looking for a Python analyst who knows Excel and SQL",
        );
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_empty_job_description() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.similarity("react javascript css", ""), 0.0);
        assert_eq!(engine.similarity("", ""), 0.0);
        // only stop words leaves an empty vocabulary
        assert_eq!(engine.similarity("the and of", "with from"), 0.0);
    }

    #[test]
    fn test_keyword_overlap_uses_substrings() {
        let engine = SimilarityEngine::new();
        let processor = TextProcessor::new();

        let overlap = engine.keyword_overlap(
            &processor,
            "Frontend work with JavaScript and Docker",
            "java java java docker kubernetes",
            10,
        );

        // "java" is found inside "javascript"
        assert_eq!(overlap.matched, vec!["java", "docker"]);
        assert_eq!(overlap.missing, vec!["kubernetes"]);
        assert!((overlap.ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_lists_are_capped() {
        let engine = SimilarityEngine::new();
        let processor = TextProcessor::new();
        let jd: String = (0..60).map(|i| format!("skill{:02} ", i)).collect();

        let overlap = engine.keyword_overlap(&processor, "", &jd, 45);
        assert!(overlap.matched.is_empty());
        assert_eq!(overlap.missing.len(), OVERLAP_CAP);
        assert_eq!(overlap.ratio(), 0.0);
    }
}
