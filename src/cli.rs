//! CLI interface for the resume analyzer

use crate::config::{OutputFormat, PaperSize};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume scoring, keyword matching and ATS-safe resume builder")]
#[command(long_about = "Score a resume on formatting, content and ATS readiness, match it against a job description, recommend roles and skills, and build ATS-friendly PDF resumes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include role scores, bullet rewrites and the resume preview
        #[arg(short, long)]
        detailed: bool,
    },

    /// Build an ATS-safe PDF from a structured resume JSON file
    Build {
        /// Path to resume JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF path (defaults to <Name>_ATS.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Paper size: letter or a4 (defaults to the configured size)
        #[arg(short, long)]
        paper: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

pub fn parse_paper_size(paper: &str) -> Result<PaperSize, String> {
    match paper.to_lowercase().as_str() {
        "letter" => Ok(PaperSize::Letter),
        "a4" => Ok(PaperSize::A4),
        _ => Err(format!("Invalid paper size: {}. Supported: letter, a4", paper)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "resume-analyzer", "analyze", "--resume", "cv.pdf", "--job-text", "Rust developer", "-o", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { resume, job, job_text, output, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("Rust developer"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_job_sources_conflict() {
        let result = Cli::try_parse_from([
            "resume-analyzer", "analyze", "-r", "cv.pdf", "-j", "jd.txt", "--job-text", "inline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_paper_size() {
        assert_eq!(parse_paper_size("A4").unwrap(), PaperSize::A4);
        assert!(parse_paper_size("legal").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "docx"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.xyz"), &["pdf"]).is_err());
        assert!(validate_file_extension(Path::new("README"), &["pdf"]).is_err());
    }
}
