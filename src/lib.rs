//! Resume analyzer library: scoring, job matching, role recommendations and an ATS-safe PDF builder

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
pub use processing::{AnalysisResult, JobInput, ResumeAnalyzer};
