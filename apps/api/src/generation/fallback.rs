//! Deterministic fallback renderer.
//!
//! Produces a plain-text document straight from the form data, with no
//! provider call. Used when the provider reports quota exhaustion or rate
//! limiting. Total for any validated request; absent optional fields render
//! as empty segments.

use crate::models::form::{format_number, non_empty, DocumentType, GenerationRequest};

const ONGOING: &str = "Present";

/// Renders the fallback document for the request's document type.
pub fn render_fallback(request: &GenerationRequest) -> String {
    match request.document_type {
        DocumentType::CoverLetter => render_cover_letter(request),
        DocumentType::Resume => render_resume(request),
    }
}

fn render_cover_letter(request: &GenerationRequest) -> String {
    let info = &request.basic_info;
    let skills = &request.skills;

    let experience = request
        .work_experience
        .iter()
        .map(|exp| {
            format!(
                "• {} at {}: {}",
                exp.job_title, exp.company_name, exp.responsibilities
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let (degree, institution) = match request.education.first() {
        Some(edu) => (edu.degree.as_str(), edu.institution.as_str()),
        None => ("relevant degree", "a respected institution"),
    };

    format!(
        "Dear Hiring Manager,\n\
         \n\
         I am writing to express my strong interest in the {job_title} position. \
         With {years} years of experience in the field, I am confident that I would be \
         a valuable addition to your team.\n\
         \n\
         Throughout my career I have developed expertise in {technical}. \
         My professional experience includes:\n\
         \n\
         {experience}\n\
         \n\
         I hold a {degree} from {institution}, which has given me a strong foundation \
         in the field. My soft skills include {soft}, and I am proficient in {languages}.\n\
         \n\
         I would welcome the opportunity to discuss how my experience and skills can \
         benefit your organization. Thank you for your consideration.\n\
         \n\
         Sincerely,\n\
         {name}",
        job_title = info.job_title,
        years = format_number(&info.years_experience),
        technical = skills.technical_skills,
        experience = experience,
        degree = degree,
        institution = institution,
        soft = skills.soft_skills,
        languages = skills.language_skills,
        name = info.name,
    )
}

fn render_resume(request: &GenerationRequest) -> String {
    let info = &request.basic_info;
    let skills = &request.skills;

    let experience = request
        .work_experience
        .iter()
        .map(|exp| {
            let mut block = format!(
                "{} | {}\n{} - {}\n• {}",
                exp.job_title,
                exp.company_name,
                exp.start_date,
                non_empty(&exp.end_date).unwrap_or(ONGOING),
                exp.responsibilities
            );
            if let Some(achievements) = non_empty(&exp.achievements) {
                block.push_str("\n• Achievements: ");
                block.push_str(achievements);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let education = request
        .education
        .iter()
        .map(|edu| {
            let mut block = format!(
                "{} | {}\n{} - {}",
                edu.degree,
                edu.institution,
                edu.start_date,
                non_empty(&edu.end_date).unwrap_or(ONGOING)
            );
            if let Some(description) = non_empty(&edu.description) {
                block.push('\n');
                block.push_str(description);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{name}\n\
         {job_title}\n\
         \n\
         Contact Information:\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Location: {location}\n\
         \n\
         PROFESSIONAL SUMMARY\n\
         Experienced {job_title} with {years} years of expertise in delivering \
         high-quality results and leading teams effectively.\n\
         \n\
         WORK EXPERIENCE\n\
         {experience}\n\
         \n\
         EDUCATION\n\
         {education}\n\
         \n\
         TECHNICAL SKILLS\n\
         {technical}\n\
         \n\
         SOFT SKILLS\n\
         {soft}\n\
         \n\
         LANGUAGES\n\
         {languages}\n",
        name = info.name,
        job_title = info.job_title,
        email = info.email,
        phone = info.phone,
        location = info.location,
        years = format_number(&info.years_experience),
        experience = experience,
        education = education,
        technical = skills.technical_skills,
        soft = skills.soft_skills,
        languages = skills.language_skills,
    )
}
