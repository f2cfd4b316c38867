//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::{ExtractedText, InputManager};
pub use text_extractor::{clean_text, extract_resume_text};
