//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub builder: BuilderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many of the most frequent job description keywords are checked against the resume
    pub jd_keyword_pool: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub min_text_chars: usize,
    pub preview_chars: usize,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub paper: PaperSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaperSize {
    Letter,
    A4,
}

impl PaperSize {
    /// Page dimensions in millimetres (width, height)
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::A4 => (210.0, 297.0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                jd_keyword_pool: 45,
            },
            input: InputConfig {
                min_text_chars: 50,
                preview_chars: 1200,
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
            builder: BuilderConfig {
                paper: PaperSize::Letter,
            },
        }
    }
}

impl Config {
    /// Load from an explicit path, writing the defaults there when the file is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.jd_keyword_pool == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "analysis.jd_keyword_pool must be greater than zero".to_string(),
            ));
        }
        if self.input.preview_chars == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "input.preview_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
