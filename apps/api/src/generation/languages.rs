//! Language profiles: cultural and structural guidance per language code.
//!
//! Read-only reference data. Unknown codes resolve to the English profile.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub display_name: &'static str,
    pub cultural_notes: &'static str,
    pub document_structure: &'static str,
    pub formality: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

pub static LANGUAGE_PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "en",
        display_name: "English",
        cultural_notes: "Use professional, confident language. Emphasize achievements and quantifiable results.",
        document_structure: "Clear headings, bullet points for achievements, concise paragraphs.",
        formality: "Professional but approachable. Use active voice and action verbs.",
    },
    LanguageProfile {
        code: "nl",
        display_name: "Dutch (Nederlands)",
        cultural_notes: "Dutch business culture values directness, humility, and collaboration. Avoid overly boastful language.",
        document_structure: "Traditional CV format with clear sections. Prefer comprehensive paragraphs.",
        formality: "Professional and modest. Be specific but not overly promotional.",
    },
    LanguageProfile {
        code: "fr",
        display_name: "French (Français)",
        cultural_notes: "French professional culture values eloquence, education, and intellectual approach.",
        document_structure: "Formal structure with detailed descriptions. Education section is prominent.",
        formality: "Formal and sophisticated. Use elegant expressions and avoid anglicisms.",
    },
    LanguageProfile {
        code: "de",
        display_name: "German (Deutsch)",
        cultural_notes: "German business culture values thoroughness, precision, and qualifications.",
        document_structure: "Comprehensive, detailed format (Lebenslauf). Include all relevant qualifications.",
        formality: "Very professional and detailed. Use precise language.",
    },
    LanguageProfile {
        code: "es",
        display_name: "Spanish (Español)",
        cultural_notes: "Spanish-speaking cultures value relationships and personal connection.",
        document_structure: "Personal information section at top. Balance professional and personal aspects.",
        formality: "Professional but warm. Show personality alongside qualifications.",
    },
    LanguageProfile {
        code: "it",
        display_name: "Italian (Italiano)",
        cultural_notes: "Italian business culture appreciates personal style, creativity, and relationship-building.",
        document_structure: "Elegant formatting with attention to visual appeal.",
        formality: "Professional with personal touch. Show passion and enthusiasm.",
    },
    LanguageProfile {
        code: "pt",
        display_name: "Portuguese (Português)",
        cultural_notes: "Portuguese and Brazilian culture values relationships, education, and personal development.",
        document_structure: "Include personal information and educational background prominently.",
        formality: "Respectful and warm. Emphasize growth, learning, and collaborative achievements.",
    },
    LanguageProfile {
        code: "zh",
        display_name: "Chinese (中文)",
        cultural_notes: "Chinese business culture values education, hierarchy, respect, and long-term thinking.",
        document_structure: "Education and qualifications first, followed by experience.",
        formality: "Highly respectful and humble. Emphasize dedication and continuous improvement.",
    },
    LanguageProfile {
        code: "ja",
        display_name: "Japanese (日本語)",
        cultural_notes: "Japanese business culture emphasizes respect, group harmony, and continuous improvement.",
        document_structure: "Formal structure with careful attention to detail.",
        formality: "Very respectful and humble. Use formal language.",
    },
    LanguageProfile {
        code: "ko",
        display_name: "Korean (한국어)",
        cultural_notes: "Korean business culture values education, hard work, and respect for hierarchy.",
        document_structure: "Educational background prominently featured.",
        formality: "Respectful and formal. Emphasize dedication and educational achievement.",
    },
    LanguageProfile {
        code: "ar",
        display_name: "Arabic (العربية)",
        cultural_notes: "Arabic business culture values respect, family, education, and personal relationships.",
        document_structure: "Include personal information that shows character and family values.",
        formality: "Respectful and dignified. Use formal Arabic expressions.",
    },
    LanguageProfile {
        code: "hi",
        display_name: "Hindi (हिन्दी)",
        cultural_notes: "Indian business culture values education, family, and respect for experience.",
        document_structure: "Educational qualifications prominent.",
        formality: "Respectful and humble. Emphasize dedication to learning.",
    },
    LanguageProfile {
        code: "ru",
        display_name: "Russian (Русский)",
        cultural_notes: "Russian business culture values education, intellectual achievement, and systematic approach.",
        document_structure: "Detailed educational background and technical qualifications.",
        formality: "Professional and intellectual. Emphasize competence and systematic thinking.",
    },
    LanguageProfile {
        code: "pl",
        display_name: "Polish (Polski)",
        cultural_notes: "Polish business culture values education, tradition, and professional competence.",
        document_structure: "Traditional CV format with emphasis on qualifications.",
        formality: "Professional and respectful. Emphasize qualifications and experience.",
    },
    LanguageProfile {
        code: "sv",
        display_name: "Swedish (Svenska)",
        cultural_notes: "Swedish business culture values equality, collaboration, and work-life balance.",
        document_structure: "Straightforward format emphasizing team achievements.",
        formality: "Professional but egalitarian. Emphasize collaboration and balance.",
    },
];

/// Looks up a profile by exact code.
pub fn find_profile(code: &str) -> Option<&'static LanguageProfile> {
    LANGUAGE_PROFILES.iter().find(|p| p.code == code)
}

/// Returns the profile for `code`, or the English profile if the code is unknown.
pub fn resolve_profile(code: &str) -> &'static LanguageProfile {
    find_profile(code).unwrap_or(&LANGUAGE_PROFILES[0])
}
