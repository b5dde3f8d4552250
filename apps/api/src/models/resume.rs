use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Language;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub graduation_year: Option<String>,
}

impl ExperienceEntry {
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [&self.title, &self.company, &self.description]
            .into_iter()
            .chain(self.start_date.iter())
            .chain(self.end_date.iter())
            .map(String::as_str)
    }
}

/// Everything `analyze_resume` looks at: the rendered text plus the structured form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeInput {
    pub content: String,
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub language: Language,
}

impl ResumeInput {
    /// Every free-text value in the input, content included.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        let info = &self.personal_info;
        let education = self.education.iter().flat_map(|entry| {
            [&entry.degree, &entry.institution, &entry.field]
                .into_iter()
                .chain(entry.graduation_year.iter())
                .map(String::as_str)
        });

        [&self.content, &info.name, &info.email, &info.phone, &info.location, &info.summary]
            .into_iter()
            .chain(&self.skills)
            .map(String::as_str)
            .chain(self.experiences.iter().flat_map(|entry| entry.text_fields()))
            .chain(education)
    }
}

/// Presence flags taken straight from the structured input, not from the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_contact: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub keywords: u32,
    pub formatting: u32,
    pub structure: u32,
    pub length: u32,
    pub readability: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: u32, // 0 – 100
    pub breakdown: AtsBreakdown,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalytics {
    pub word_count: usize,
    pub character_count: usize,
    pub readability_score: f64,
    /// keyword → percentage of total words, two decimals, nonzero entries only
    pub keyword_density: BTreeMap<String, f64>,
    pub section_analysis: SectionAnalysis,
    pub ats_score: AtsScore,
    pub suggestions: Vec<String>,
}
