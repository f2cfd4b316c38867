//! Resume builder
//! Structured resume model, ATS-safe single-column layout and PDF rendering

pub mod layout;
pub mod pdf;
pub mod resume;

pub use pdf::render_resume_pdf;
pub use resume::{suggested_pdf_filename, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument};
