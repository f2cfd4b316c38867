//! Input manager for reading resumes and job descriptions from disk

use crate::config::InputConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{ensure_min_length, extract_resume_text, MIN_TEXT_CHARS};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Cleaned text of one input file and the format it was read as
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub file_type: FileType,
}

pub struct InputManager {
    cache: HashMap<String, ExtractedText>,
    enable_cache: bool,
    min_text_chars: usize,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            min_text_chars: MIN_TEXT_CHARS,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new()
            .with_cache(config.enable_caching)
            .with_min_text_chars(config.min_text_chars)
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    /// Read a resume and reject it when too little text comes out
    pub async fn load_resume(&mut self, path: &Path) -> Result<ExtractedText> {
        let extracted = self.extract_text(path).await?;
        ensure_min_length(&extracted.text, self.min_text_chars)?;
        Ok(extracted)
    }

    /// Read a job description; any length is accepted and an empty file means resume-only
    pub async fn load_job_description(&mut self, path: &Path) -> Result<String> {
        match self.extract_text(path).await {
            Ok(extracted) => Ok(extracted.text),
            Err(ResumeAnalyzerError::EmptyUpload(_)) => {
                info!("Job description {} is empty", path.display());
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<ExtractedText> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        info!("Extracting text from: {}", path.display());
        let (text, file_type) = extract_resume_text(&filename, &bytes)?;
        log::debug!("Read {} characters as {}", text.chars().count(), file_type);

        let extracted = ExtractedText { text, file_type };
        if self.enable_cache {
            self.cache.insert(path_str, extracted.clone());
        }

        Ok(extracted)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_and_caches_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "A resume with enough words to pass the minimum length gate easily.").unwrap();

        let mut manager = InputManager::new();
        let first = manager.load_resume(&path).await.unwrap();
        assert_eq!(first.file_type, FileType::Text);
        assert_eq!(manager.cache_size(), 1);

        // served from cache even after the file changes
        std::fs::write(&path, "changed").unwrap();
        let second = manager.load_resume(&path).await.unwrap();
        assert_eq!(first, second);

        manager.clear_cache();
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_short_resume_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Too short").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        let err = manager.load_resume(&path).await.unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::InsufficientText { .. }));

        // the same file is fine as a job description
        assert_eq!(manager.load_job_description(&path).await.unwrap(), "Too short");
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_empty_job_description_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "").unwrap();

        let mut manager = InputManager::new();
        assert_eq!(manager.load_job_description(&path).await.unwrap(), "");

        // an empty resume is still an error
        let err = manager.load_resume(&path).await.unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::EmptyUpload(_)));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let mut manager = InputManager::new();
        let err = manager
            .extract_text(Path::new("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::InvalidInput(_)));
    }
}
