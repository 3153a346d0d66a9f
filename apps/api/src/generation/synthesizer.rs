//! Prompt synthesis. Renders the generation prompt from a validated request.
//!
//! Pure and infallible. Substitution is a single pass over the template, so
//! candidate text that happens to contain `{placeholder}` is never expanded.

use std::borrow::Cow;

use crate::generation::languages::resolve_profile;
use crate::generation::prompts::{DOCUMENT_PROMPT_TEMPLATE, PLACEHOLDERS};
use crate::models::form::{
    format_number, non_empty, EducationEntry, GenerationRequest, WorkExperienceEntry,
};

const ONGOING: &str = "Present";

/// Builds the full generation prompt for `request`.
///
/// The language block uses the resolved profile (English when the code is
/// unknown), while the task line still names the requested code.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let profile = resolve_profile(&request.language);
    let info = &request.basic_info;
    let skills = &request.skills;
    let motivation = request.motivation.clone().unwrap_or_default();

    let work_experience = render_work_experience(&request.work_experience);
    let education = render_education(&request.education);

    render_template(DOCUMENT_PROMPT_TEMPLATE, |key| {
        let value: Cow<'_, str> = match key {
            "document_type" => request.document_type.prompt_label().into(),
            "language" => request.language.as_str().into(),
            "language_name" => profile.display_name.into(),
            "cultural_notes" => profile.cultural_notes.into(),
            "document_structure" => profile.document_structure.into(),
            "formality_level" => profile.formality.into(),
            "name" => info.name.as_str().into(),
            "job_title" => info.job_title.as_str().into(),
            "age" => format_number(&info.age).into(),
            "gender" => non_empty(&info.gender).unwrap_or("").into(),
            "country" => info.country.as_str().into(),
            "years_experience" => format_number(&info.years_experience).into(),
            "email" => info.email.as_str().into(),
            "phone" => info.phone.as_str().into(),
            "location" => info.location.as_str().into(),
            "work_experience" => work_experience.as_str().into(),
            "education" => education.as_str().into(),
            "technical_skills" => skills.technical_skills.as_str().into(),
            "soft_skills" => skills.soft_skills.as_str().into(),
            "language_skills" => skills.language_skills.as_str().into(),
            "why_applying" => non_empty(&motivation.why_applying).unwrap_or("").into(),
            "what_attracts" => non_empty(&motivation.what_attracts).unwrap_or("").into(),
            "unique_qualities" => non_empty(&motivation.unique_qualities).unwrap_or("").into(),
            "career_goals" => non_empty(&motivation.career_goals).unwrap_or("").into(),
            _ => return None,
        };
        debug_assert!(PLACEHOLDERS.contains(&key), "{key} missing from PLACEHOLDERS");
        Some(value)
    })
}

/// One line per entry, input order preserved.
pub fn render_work_experience(entries: &[WorkExperienceEntry]) -> String {
    entries
        .iter()
        .map(|exp| {
            let mut line = format!(
                "{} at {} ({} - {}): {}",
                exp.job_title,
                exp.company_name,
                exp.start_date,
                non_empty(&exp.end_date).unwrap_or(ONGOING),
                exp.responsibilities
            );
            if let Some(achievements) = non_empty(&exp.achievements) {
                line.push_str(". Achievements: ");
                line.push_str(achievements);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per entry, input order preserved.
pub fn render_education(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|edu| {
            let mut line = format!(
                "{} from {} ({} - {})",
                edu.degree,
                edu.institution,
                edu.start_date,
                non_empty(&edu.end_date).unwrap_or(ONGOING)
            );
            if let Some(description) = non_empty(&edu.description) {
                line.push_str(": ");
                line.push_str(description);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces each `{key}` for which `lookup` returns a value. Anything else,
/// including unmatched braces, is copied through unchanged.
fn render_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Cow<'a, str>>,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after
            .find('}')
            .and_then(|close| lookup(&after[..close]).map(|value| (close, value)));

        match substituted {
            Some((close, value)) => {
                out.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
