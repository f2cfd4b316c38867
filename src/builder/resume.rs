//! Structured resume document used by the PDF builder

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills_list: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl ResumeDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ResumeAnalyzerError::InvalidInput(format!("Invalid resume JSON: {}", e))
        })
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Location, email, phone and then links, blanks dropped
    pub fn contact_parts(&self) -> Vec<&str> {
        [self.location.as_str(), self.email.as_str(), self.phone.as_str()]
            .into_iter()
            .chain(self.links.iter().map(String::as_str))
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

impl EducationEntry {
    pub fn is_blank(&self) -> bool {
        all_blank(&[&self.school, &self.degree, &self.dates, &self.location])
    }
}

impl ExperienceEntry {
    /// Bullets alone do not make an entry
    pub fn is_blank(&self) -> bool {
        all_blank(&[&self.role, &self.company, &self.dates, &self.location])
    }
}

impl ProjectEntry {
    pub fn is_blank(&self) -> bool {
        all_blank(&[&self.title, &self.tech, &self.dates])
    }
}

/// `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn all_blank(fields: &[&String]) -> bool {
    fields.iter().all(|field| field.trim().is_empty())
}

/// Trimmed, non-empty items of a free-text list
pub fn clean_items(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Download name for a rendered resume: spaces become underscores, `_ATS.pdf` appended
pub fn suggested_pdf_filename(name: &str) -> String {
    let base = if name.is_empty() { "resume" } else { name };
    format!("{}_ATS.pdf", base.replace(' ', "_"))
}
