use serde::{Deserialize, Serialize};

use crate::models::Language;
use crate::vocabulary::vocabulary;

/// Structured view of a free-form job posting.
///
/// Scalar fields are `None` when extraction found nothing. Placeholder text for
/// display ("Unknown Position", "Nicht angegeben", ...) comes from the accessors
/// below and is never stored in the record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobPosting {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub language: Language,
}

impl ParsedJobPosting {
    pub fn title_or_placeholder(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or(vocabulary(self.language).placeholders.title)
    }

    pub fn company_or_placeholder(&self) -> &str {
        self.company
            .as_deref()
            .unwrap_or(vocabulary(self.language).placeholders.company)
    }

    pub fn location_or_placeholder(&self) -> &str {
        self.location
            .as_deref()
            .unwrap_or(vocabulary(self.language).placeholders.not_specified)
    }

    /// Every free-text value in the record, lists included.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.description,
            &self.experience,
            &self.education,
            &self.salary,
            &self.job_type,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .chain(
            self.requirements
                .iter()
                .chain(&self.skills)
                .chain(&self.benefits)
                .map(String::as_str),
        )
    }
}

/// Static weight tier of a job skill, used to decide which skills to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillImportance {
    High,
    Medium,
    Low,
}

/// One entry per skill found in the posting (never per resume skill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub matched: bool,
    pub importance: SkillImportance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchAnalysis {
    pub overall_match: u32, // 0 – 100
    pub skill_matches: Vec<SkillMatch>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub tailored_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_follow_posting_language() {
        let mut posting = ParsedJobPosting::default();
        assert_eq!(posting.title_or_placeholder(), "Unknown Position");
        assert_eq!(posting.company_or_placeholder(), "Unknown Company");

        posting.language = Language::De;
        assert_eq!(posting.title_or_placeholder(), "Unbekannte Position");
        assert_eq!(posting.location_or_placeholder(), "Nicht angegeben");
    }

    #[test]
    fn test_extracted_value_wins_over_placeholder() {
        let posting = ParsedJobPosting {
            company: Some("Acme Corp".to_string()),
            ..Default::default()
        };
        assert_eq!(posting.company_or_placeholder(), "Acme Corp");
    }

    #[test]
    fn test_text_fields_skip_missing_scalars() {
        let posting = ParsedJobPosting {
            title: Some("Engineer".to_string()),
            salary: Some("$100k".to_string()),
            skills: vec!["Rust".to_string()],
            benefits: vec!["Remote budget".to_string()],
            ..Default::default()
        };
        let fields: Vec<&str> = posting.text_fields().collect();
        assert_eq!(fields, vec!["Engineer", "$100k", "Rust", "Remote budget"]);
    }

    #[test]
    fn test_missing_fields_serialize_as_null() {
        let json = serde_json::to_value(ParsedJobPosting::default()).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["remote"], false);
        assert_eq!(json["language"], "en");
        assert_eq!(json["skills"].as_array().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_importance_serde_snake_case() {
        let json = serde_json::to_string(&SkillImportance::High).unwrap();
        assert_eq!(json, r#""high""#);
    }
}
