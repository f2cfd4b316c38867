//! Output formatting module
//! Wraps analysis results in a report and renders it in the configured format

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{AnalysisReport, JobSource, ReportMetadata};
