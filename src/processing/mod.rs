//! Text processing and analysis module

pub mod analyzer;
pub mod catalog;
pub mod keywords;
pub mod metrics;
pub mod recommendations;
pub mod role_fit;
pub mod similarity;
pub mod text_processor;

pub use analyzer::{AnalysisResult, JobInput, ResumeAnalyzer};
