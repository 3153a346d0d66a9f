// Prompt template for document generation.
// Placeholders are `{snake_case}` names, filled by `synthesizer::build_prompt`.

/// Every placeholder the template uses. The synthesizer must know all of them.
pub const PLACEHOLDERS: &[&str] = &[
    "document_type",
    "language",
    "language_name",
    "cultural_notes",
    "document_structure",
    "formality_level",
    "name",
    "job_title",
    "age",
    "gender",
    "country",
    "years_experience",
    "email",
    "phone",
    "location",
    "work_experience",
    "education",
    "technical_skills",
    "soft_skills",
    "language_skills",
    "why_applying",
    "what_attracts",
    "unique_qualities",
    "career_goals",
];

/// Generation prompt: role framing, task, language block, candidate data,
/// instructions, closing directive.
pub const DOCUMENT_PROMPT_TEMPLATE: &str = r#"You are an expert career writer who produces resumes, CVs and cover letters, with deep knowledge of how hiring conventions differ between languages and business cultures.

**Task:** Write a {document_type} in {language} for the candidate described below.

**Language & Cultural Context:**
Language: {language_name}
Cultural Notes: {cultural_notes}
Document Structure: {document_structure}
Formality Level: {formality_level}

**Candidate:**
- Name: {name}
- Target Job Title: {job_title}
- Age: {age}
- Gender: {gender}
- Country: {country}
- Years of Experience: {years_experience}
- Email: {email}
- Phone: {phone}
- Location: {location}

**Work Experience** (most relevant first, as entered):
{work_experience}

**Education:**
{education}

**Skills:**
- Technical: {technical_skills}
- Soft: {soft_skills}
- Languages: {language_skills}

**Motivation** (cover letters only; may be blank):
- Why applying: {why_applying}
- What attracts the candidate to the organization: {what_attracts}
- Unique qualities: {unique_qualities}
- Career goals: {career_goals}

**Instructions:**
1. Write the whole document natively in {language}, using expressions and professional conventions of {language_name}-speaking regions.
2. Respect the cultural notes above when choosing what to emphasise.
3. Follow the document structure guidance above.
4. Keep to the formality level above throughout.
5. For a resume/CV, present experience and achievements the way local employers expect to read them.
6. For a cover letter, build a persuasive narrative that shows awareness of local business culture.
7. Use the standard section names and terminology of {language_name} professional documents.
8. Include the greetings and closings customary for this language and document type.
9. Do not invent employers, dates, degrees or skills that are not listed above.

Return only the finished {document_type} text, with no commentary before or after it."#;
