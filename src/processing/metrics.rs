//! Heuristic metric scorers, grading and the ATS checklist

use crate::error::Result;
use crate::processing::keywords::KeywordSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACTION_VERBS: &[&str] = &[
    "built", "led", "designed", "improved", "optimized",
    "reduced", "increased", "delivered", "implemented",
    "developed", "created", "automated", "deployed", "tested",
    "analyzed", "integrated", "maintained", "supported",
];

/// Keyword usage when there is no job description to compare against
pub const KEYWORD_USAGE_WITHOUT_JD: f64 = 6.5;

const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.8 {
            Grade::Excellent
        } else if score >= 7.2 {
            Grade::Good
        } else if score >= 5.8 {
            Grade::Average
        } else {
            Grade::NeedsWork
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Average => "Average",
            Grade::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pass/fail line of the ATS checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCheck {
    pub label: String,
    pub passed: bool,
    pub tip: String,
}

impl AtsCheck {
    fn new(label: &str, passed: bool, tip: &str) -> Self {
        Self {
            label: label.to_string(),
            passed,
            tip: tip.to_string(),
        }
    }
}

pub struct MetricScorer {
    heading_regex: Regex,
    number_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    action_verbs: KeywordSet,
}

impl MetricScorer {
    pub fn new() -> Result<Self> {
        let heading_regex = Regex::new(r"(?i)^(experience|education|skills|projects|summary)\b")
            .expect("Invalid heading regex");
        let number_regex = Regex::new(r"\b\d+(\.\d+)?%?\b")
            .expect("Invalid number regex");
        let email_regex = Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
            .expect("Invalid email regex");
        let phone_regex = Regex::new(r"\+?\d[\d\-\s()]{8,}\d")
            .expect("Invalid phone regex");

        Ok(Self {
            heading_regex,
            number_regex,
            email_regex,
            phone_regex,
            action_verbs: KeywordSet::new(ACTION_VERBS)?,
        })
    }

    /// Structure score: headings and bullet usage on top of a 6.5 baseline
    pub fn formatting(&self, text: &str) -> f64 {
        let lines = content_lines(text);
        if lines.is_empty() {
            return 3.0;
        }

        let bullets = lines.iter().filter(|line| is_bullet(line)).count();

        let mut score: f64 = 6.5;
        if self.has_heading(&lines) {
            score += 1.0;
        }
        if bullets >= 5 {
            score += 1.0;
        }
        if bullets >= 12 {
            score += 0.5;
        }
        score.min(10.0)
    }

    /// Impact score: distinct action verbs and quantities on top of a 6.0 baseline
    pub fn content_quality(&self, text: &str) -> f64 {
        let verbs = self.action_verbs.count_present(&text.to_lowercase());
        let numbers = self.number_regex.find_iter(text).count();

        let mut score: f64 = 6.0;
        if verbs >= 3 {
            score += 1.2;
        }
        if verbs >= 6 {
            score += 0.8;
        }
        if numbers >= 3 {
            score += 1.0;
        }
        if numbers >= 8 {
            score += 0.6;
        }
        score.min(10.0)
    }

    pub fn has_number(&self, text: &str) -> bool {
        self.number_regex.is_match(text)
    }

    pub fn ats_checklist(&self, text: &str) -> Vec<AtsCheck> {
        let text = text.trim();
        let lines = content_lines(text);
        let bullets = lines.iter().filter(|line| is_bullet(line)).count();

        vec![
            AtsCheck::new(
                "Email present",
                self.email_regex.is_match(text),
                "Add an email in the header.",
            ),
            AtsCheck::new(
                "Phone number present",
                self.phone_regex.is_match(text),
                "Add a reachable phone number.",
            ),
            AtsCheck::new(
                "LinkedIn link present",
                text.to_lowercase().contains("linkedin.com"),
                "Add LinkedIn URL (custom if possible).",
            ),
            AtsCheck::new(
                "Clear section headings",
                self.has_heading(&lines),
                "Use headings: Summary, Skills, Experience, Education.",
            ),
            AtsCheck::new(
                "Bullet points used",
                bullets >= 6,
                "Use bullets for achievements (6+ recommended).",
            ),
            AtsCheck::new(
                "Good length",
                text.chars().count() >= 900,
                "Aim for 1 page (students) or 1–2 pages (experienced).",
            ),
        ]
    }

    fn has_heading(&self, lines: &[&str]) -> bool {
        lines.iter().any(|line| self.heading_regex.is_match(line))
    }
}

/// Parseability score: length, exotic characters and line structure
pub fn ats_compatibility(text: &str) -> f64 {
    let length = text.chars().count();
    let unusual = text
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r' | ' '..='~'))
        .count();

    let mut score: f64 = 7.0;
    if length > 1200 {
        score += 1.0;
    }
    if length > 2500 {
        score += 0.5;
    }
    if unusual > 30 {
        score -= 1.0;
    }
    if !text.contains('\n') {
        score -= 1.0;
    }
    score.clamp(2.0, 10.0)
}

pub fn keyword_usage(match_percent: Option<u8>) -> f64 {
    match match_percent {
        None => KEYWORD_USAGE_WITHOUT_JD,
        Some(percent) => (2.0 + (f64::from(percent) / 100.0) * 8.0).clamp(2.0, 10.0),
    }
}

/// One decimal place, rounded from the exact binary value with ties to even
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Characters that end a line, including the vertical tab, form feed and Unicode separators
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Trimmed, non-empty lines
pub fn content_lines(text: &str) -> Vec<&str> {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> MetricScorer {
        MetricScorer::new().unwrap()
    }

    #[test]
    fn test_formatting_empty_text() {
        assert_eq!(scorer().formatting(""), 3.0);
        assert_eq!(scorer().formatting("  \n\t\n "), 3.0);
    }

    #[test]
    fn test_formatting_plain_prose() {
        assert_eq!(scorer().formatting("Just a paragraph of words."), 6.5);
    }

    #[test]
    fn test_formatting_headings_and_bullets() {
        let mut text = String::from("EXPERIENCE\n");
        for i in 0..12 {
            text.push_str(&format!("- item {}\n", i));
        }
        assert_eq!(scorer().formatting(&text), 9.0);

        let five = "Skills\n• a\n• b\n* c\n- d\n- e\n";
        assert_eq!(scorer().formatting(five), 8.5);
    }

    #[test]
    fn test_lines_split_on_all_line_breaks() {
        assert_eq!(
            content_lines("a\rb\r\nc\x0bd\x0ce\u{85}f\u{2028}g\u{2029}h\x1ci"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );

        // old Mac line endings still yield one line per bullet
        let text = "Skills\r- a\r- b\r- c\r- d\r- e";
        assert_eq!(scorer().formatting(text), 8.5);
    }

    #[test]
    fn test_heading_needs_word_boundary() {
        // "Skillset" is not a heading word
        assert_eq!(scorer().formatting("Skillset\nother line"), 6.5);
        assert_eq!(scorer().formatting("   summary: quick facts"), 7.5);
    }

    #[test]
    fn test_content_quality() {
        let s = scorer();
        assert_eq!(s.content_quality("quiet words only"), 6.0);

        // three verbs, three numbers
        let text = "Built a tool, designed flows, deployed it for 3 teams in 2 weeks at 40% cost";
        assert!((s.content_quality(text) - 8.2).abs() < 1e-9);

        let rich = "built led designed improved optimized reduced 1 2 3 4 5 6 7 8";
        assert!((s.content_quality(rich) - 9.6).abs() < 1e-9);
    }

    #[test]
    fn test_ats_compatibility() {
        assert_eq!(ats_compatibility("single line"), 6.0);
        assert_eq!(ats_compatibility("two\nlines"), 7.0);

        let long = format!("{}\n", "a".repeat(2600));
        assert_eq!(ats_compatibility(&long), 8.5);

        let exotic = format!("{}\n", "é".repeat(31));
        assert_eq!(ats_compatibility(&exotic), 6.0);
    }

    #[test]
    fn test_keyword_usage() {
        assert_eq!(keyword_usage(None), 6.5);
        assert_eq!(keyword_usage(Some(0)), 2.0);
        assert_eq!(keyword_usage(Some(50)), 6.0);
        assert_eq!(keyword_usage(Some(100)), 10.0);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(9.0), Grade::Excellent);
        assert_eq!(Grade::from_score(8.8), Grade::Excellent);
        assert_eq!(Grade::from_score(8.79), Grade::Good);
        assert_eq!(Grade::from_score(7.2), Grade::Good);
        assert_eq!(Grade::from_score(5.8), Grade::Average);
        assert_eq!(Grade::from_score(5.79), Grade::NeedsWork);
        assert_eq!(Grade::NeedsWork.to_string(), "Needs Work");
        assert_eq!(serde_json::to_string(&Grade::NeedsWork).unwrap(), "\"Needs Work\"");
    }

    #[test]
    fn test_checklist() {
        let text = "Jane Doe\njane@example.com | +1 (555) 123-4567 | linkedin.com/in/jane\nSummary\n- one\n- two";
        let checks = scorer().ats_checklist(text);

        assert_eq!(checks.len(), 6);
        let passed: Vec<bool> = checks.iter().map(|c| c.passed).collect();
        assert_eq!(passed, vec![true, true, true, true, false, false]);
        assert_eq!(checks[4].label, "Bullet points used");
    }

    #[test]
    fn test_checklist_empty_text() {
        let checks = scorer().ats_checklist("");
        assert!(checks.iter().all(|c| !c.passed));
        assert!(checks.iter().all(|c| !c.tip.is_empty()));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(7.25), 7.2);
        assert_eq!(round1(8.75), 8.8);
        assert_eq!(round1(6.04), 6.0);
        // 6.35 and 0.15 sit just below the halfway point in binary
        assert_eq!(round1(6.35), 6.3);
        assert_eq!(round1(0.15), 0.1);
    }
}
