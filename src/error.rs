//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Empty file uploaded: {0}")]
    EmptyUpload(String),

    #[error("Could not extract enough text from resume ({found} characters, need {required})")]
    InsufficientText { found: usize, required: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("PDF render error: {0}")]
    PdfRender(String),
}

impl ResumeAnalyzerError {
    /// True when the caller supplied something unusable, false for internal failures.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            ResumeAnalyzerError::PdfExtraction(_)
                | ResumeAnalyzerError::DocxExtraction(_)
                | ResumeAnalyzerError::UnsupportedFormat(_)
                | ResumeAnalyzerError::EmptyUpload(_)
                | ResumeAnalyzerError::InsufficientText { .. }
                | ResumeAnalyzerError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAnalyzerError::Processing(err.to_string())
    }
}
