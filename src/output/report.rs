//! Report envelope: an analysis result plus how and from what it was produced

use crate::input::FileType;
use crate::processing::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_file: String,
    pub file_type: FileType,
    pub job_source: JobSource,
    pub processing_time_ms: u64,
    /// Start of the extracted resume text, cut on grapheme boundaries
    pub resume_preview: String,
}

/// Where the job description came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum JobSource {
    None,
    File(String),
    Inline,
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobSource::None => f.write_str("none (resume-only)"),
            JobSource::File(path) => f.write_str(path),
            JobSource::Inline => f.write_str("inline text"),
        }
    }
}

impl AnalysisReport {
    pub fn new(analysis: AnalysisResult, metadata: ReportMetadata) -> Self {
        Self { metadata, analysis }
    }

    pub fn has_job_description(&self) -> bool {
        self.metadata.job_source != JobSource::None
    }
}

impl ReportMetadata {
    pub fn new(
        resume_file: impl Into<String>,
        file_type: FileType,
        job_source: JobSource,
        resume_text: &str,
        preview_chars: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.into(),
            file_type,
            job_source,
            processing_time_ms,
            resume_preview: preview(resume_text, preview_chars),
        }
    }
}

/// First `limit` user-perceived characters of `text`
pub fn preview(text: &str, limit: usize) -> String {
    text.graphemes(true).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_respects_graphemes() {
        // "e" + combining acute accent is one grapheme
        let text = "e\u{301}abc";
        assert_eq!(preview(text, 1), "e\u{301}");
        assert_eq!(preview(text, 10), text);
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_metadata() {
        let text = "x".repeat(2000);
        let metadata = ReportMetadata::new("cv.pdf", FileType::Pdf, JobSource::Inline, &text, 1200, 7);

        assert_eq!(metadata.resume_preview.len(), 1200);
        assert_eq!(metadata.analyzer_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.job_source.to_string(), "inline text");
    }

    #[test]
    fn test_job_source_serialization() {
        let json = serde_json::to_string(&JobSource::File("jd.txt".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"file","path":"jd.txt"}"#);
        assert_eq!(serde_json::to_string(&JobSource::None).unwrap(), r#"{"kind":"none"}"#);
    }
}
