//! Candidate form payload, the validated body of a generation request.
//!
//! Wire names are camelCase to match the browser form. Sequences keep the
//! order the user entered them in; nothing here re-sorts.

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Resume,
    CoverLetter,
}

impl DocumentType {
    pub const ALL: [&'static str; 2] = ["resume", "cover-letter"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::CoverLetter => "cover-letter",
        }
    }

    /// Human-readable label used inside the generation prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume/CV",
            DocumentType::CoverLetter => "cover letter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub job_title: String,
    pub age: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub country: String,
    /// Numbers are kept as submitted so stored `data` echoes the request.
    pub years_experience: Number,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    pub job_title: String,
    pub company_name: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub responsibilities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsProfile {
    pub technical_skills: String,
    pub soft_skills: String,
    pub language_skills: String,
}

/// Only meaningful for cover letters; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_applying: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_attracts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_qualities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
}

/// A complete, validated form submission. Built once per submission and
/// never mutated; edits produce a new request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub document_type: DocumentType,
    pub language: String,
    pub basic_info: CandidateProfile,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillsProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<MotivationProfile>,
}

/// Formats a form number for display text: integral values print without a
/// fractional part, so `5.0` and `5` both read "5".
pub fn format_number(value: &Number) -> String {
    if let Some(i) = value.as_i64() {
        return i.to_string();
    }
    if let Some(u) = value.as_u64() {
        return u.to_string();
    }
    match value.as_f64() {
        Some(f) => f.to_string(),
        None => value.to_string(),
    }
}

/// Treats an empty optional string the same as an absent one.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
