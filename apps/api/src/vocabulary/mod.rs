//! Language-keyed lookup tables for every analyzer.
//!
//! Tables are built once per process on first use and never mutated. Scoring code
//! only reads from here, so vocabularies can be tested on their own.

mod english;
mod german;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Language;

/// Skills recognised in postings. Tool names are the same in both languages.
pub const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "C++",
    "Go",
    "Rust",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Spring",
    ".NET",
    "GraphQL",
    "HTML",
    "CSS",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Git",
    "Linux",
    "Figma",
    "Sketch",
    "Photoshop",
];

/// Core programming and cloud technologies.
pub const HIGH_IMPORTANCE: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "Go",
    "React",
    "Node.js",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
];

/// Fundamentals every engineer is expected to know.
pub const MEDIUM_IMPORTANCE: &[&str] = &["HTML", "CSS", "Git", "Linux", "SQL", "PostgreSQL", "MySQL"];

pub struct Placeholders {
    pub title: &'static str,
    pub company: &'static str,
    pub not_specified: &'static str,
}

/// Label fragments for `<label>: value` lines, in priority order.
pub struct FieldLabels {
    pub title: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: &'static [&'static str],
    pub salary: &'static [&'static str],
    pub education: &'static [&'static str],
    pub job_type: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Description,
    Requirements,
    Benefits,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Description, Section::Requirements, Section::Benefits];
}

pub struct SectionKeywords {
    pub description: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub struct Seniority {
    pub junior_keywords: &'static [&'static str],
    pub senior_keywords: &'static [&'static str],
    pub junior_label: &'static str,
    pub senior_label: &'static str,
    /// Appended to the extracted year count, e.g. "5+ years".
    pub years_unit: &'static str,
}

/// Templated user-facing strings. `{name}` placeholders are filled with `str::replace`.
pub struct Messages {
    pub missing_skills: &'static str,
    pub emphasize_skills: &'static str,
    pub remote_experience: &'static str,
    pub tailored_summary: &'static str,

    pub keywords_recommendation: &'static str,
    pub formatting_recommendation: &'static str,
    pub structure_recommendation: &'static str,
    pub length_expand_recommendation: &'static str,
    pub length_condense_recommendation: &'static str,
    pub readability_recommendation: &'static str,

    pub keywords_strength: &'static str,
    pub formatting_strength: &'static str,
    pub structure_strength: &'static str,
    pub length_strength: &'static str,
    pub readability_strength: &'static str,

    pub keywords_weakness: &'static str,
    pub formatting_weakness: &'static str,
    pub structure_weakness: &'static str,
    pub length_weakness: &'static str,
    pub readability_weakness: &'static str,

    pub add_summary: &'static str,
    pub add_skills: &'static str,
    pub raise_score: &'static str,
    pub quantify_achievements: &'static str,
}

/// Static word lists for one language, before regex compilation.
pub struct Tables {
    pub placeholders: Placeholders,
    pub labels: FieldLabels,
    pub location_phrases: &'static [&'static str],
    pub company_lead_words: &'static [&'static str],
    pub sections: SectionKeywords,
    pub remote_keywords: &'static [&'static str],
    /// (keyword, canonical label)
    pub job_types: &'static [(&'static str, &'static str)],
    pub education_keywords: &'static [&'static str],
    pub seniority: Seniority,
    pub years_words: &'static str,
    pub experience_words: &'static str,
    pub minimum_words: &'static str,
    pub ats_keywords: &'static [&'static str],
    pub stopwords: &'static [&'static str],
    pub messages: Messages,
}

/// Compiled patterns derived from a language's `Tables`.
pub struct Patterns {
    pub title: Vec<Regex>,
    pub company: Vec<Regex>,
    pub location: Vec<Regex>,
    pub salary: Vec<Regex>,
    pub education: Vec<Regex>,
    pub job_type: Vec<Regex>,
    pub company_heuristic: Regex,
    pub location_phrase: Regex,
    pub experience_years: Regex,
    pub experience_minimum: Regex,
}

pub struct Vocabulary {
    pub language: Language,
    pub skills: &'static [&'static str],
    pub high_importance: &'static [&'static str],
    pub medium_importance: &'static [&'static str],
    pub placeholders: Placeholders,
    pub sections: SectionKeywords,
    pub remote_keywords: &'static [&'static str],
    pub job_types: &'static [(&'static str, &'static str)],
    pub education_keywords: &'static [&'static str],
    pub seniority: Seniority,
    pub ats_keywords: &'static [&'static str],
    pub stopwords: &'static [&'static str],
    pub messages: Messages,
    pub patterns: Patterns,
}

static ENGLISH: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::build(Language::En, english::tables()));
static GERMAN: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::build(Language::De, german::tables()));

/// Returns the process-wide vocabulary for `language`.
pub fn vocabulary(language: Language) -> &'static Vocabulary {
    match language {
        Language::En => &ENGLISH,
        Language::De => &GERMAN,
    }
}

impl Vocabulary {
    fn build(language: Language, tables: Tables) -> Self {
        let patterns = Patterns {
            title: labelled(tables.labels.title),
            company: labelled(tables.labels.company),
            location: labelled(tables.labels.location),
            salary: labelled(tables.labels.salary),
            education: labelled(tables.labels.education),
            job_type: labelled(tables.labels.job_type),
            company_heuristic: compile(&format!(
                r"\b(?:{})\s+(?:(?:the|der|die|das)\s+)?([A-ZÄÖÜ][\w&.\-]*(?:\s+[A-ZÄÖÜ&][\w&.\-]*){{0,3}}\s+(?:GmbH|AG|SE|KG|Inc\.?|Ltd\.?|LLC|Corp\.?|Corporation|Group))",
                tables.company_lead_words.join("|")
            )),
            location_phrase: compile(&format!(
                r"\b(?i:{})[ \t]+([A-ZÄÖÜ][\wäöüß\-]*(?:[ \t]+[A-ZÄÖÜ][\wäöüß\-]*)?)",
                tables.location_phrases.join("|")
            )),
            experience_years: compile(&format!(
                r"(?i)(\d+)\s*\+?\s*(?:{})\s+(?:of\s+)?(?:\w+\s+)?(?:{})",
                tables.years_words, tables.experience_words
            )),
            experience_minimum: compile(&format!(
                r"(?i)\b(?:{})\s+(?:of\s+)?(\d+)\s*\+?\s*(?:{})\b",
                tables.minimum_words, tables.years_words
            )),
        };

        Vocabulary {
            language,
            skills: SKILLS,
            high_importance: HIGH_IMPORTANCE,
            medium_importance: MEDIUM_IMPORTANCE,
            placeholders: tables.placeholders,
            sections: tables.sections,
            remote_keywords: tables.remote_keywords,
            job_types: tables.job_types,
            education_keywords: tables.education_keywords,
            seniority: tables.seniority,
            ats_keywords: tables.ats_keywords,
            stopwords: tables.stopwords,
            messages: tables.messages,
            patterns,
        }
    }

    pub fn section_keywords(&self, section: Section) -> &'static [&'static str] {
        match section {
            Section::Description => self.sections.description,
            Section::Requirements => self.sections.requirements,
            Section::Benefits => self.sections.benefits,
        }
    }

    /// Keywords of every other known section; any of them ends `section`.
    pub fn terminators(&self, section: Section) -> Vec<&'static str> {
        Section::ALL
            .into_iter()
            .filter(|other| *other != section)
            .flat_map(|other| self.section_keywords(other).iter().copied())
            .collect()
    }
}

/// `<label>` followed by `:` or `-`, capturing the rest of that line.
fn labelled(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| compile(&format!(r"(?im)\b(?:{label})[ \t]*[:\-][ \t]*([^\n]+)")))
        .collect()
}

// Every pattern is built from the static tables in this module, so a failure is a
// programming error caught by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid vocabulary pattern {pattern:?}: {e}"))
}
