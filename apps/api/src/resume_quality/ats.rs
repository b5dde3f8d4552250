//! ATS breakdown scores. Each dimension is an integer in [0, 100]; the overall
//! score is a fixed weighted sum of the five integers.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{AtsBreakdown, ResumeInput};

#[derive(Debug, Clone)]
pub struct AtsWeights {
    pub keywords: f64,
    pub formatting: f64,
    pub structure: f64,
    pub length: f64,
    pub readability: f64,
}

impl Default for AtsWeights {
    fn default() -> Self {
        Self {
            keywords: 0.30,
            formatting: 0.20,
            structure: 0.25,
            length: 0.15,
            readability: 0.10,
        }
    }
}

const COVERAGE_WEIGHT: f64 = 0.7;
const DENSITY_WEIGHT: f64 = 0.3;
const SUMMARY_MIN_CHARS: usize = 50;
const NON_ASCII_LIMIT: f64 = 0.10;

static REPEATED_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}").expect("valid pattern"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid pattern"));
static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[•\-*+][ \t]").expect("valid pattern"));
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid pattern"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+\-]+@[\w\-]+\.[\w.\-]+").expect("valid pattern"));

/// Rewards an average keyword density of 1–3%.
pub fn density_score(average_density: f64) -> f64 {
    if average_density <= 0.0 {
        0.0
    } else if average_density < 1.0 {
        average_density * 100.0
    } else if average_density <= 3.0 {
        100.0
    } else {
        (100.0 - (average_density - 3.0) * 20.0).max(0.0)
    }
}

/// 70% vocabulary coverage, 30% density quality.
pub fn keywords_score(density: &BTreeMap<String, f64>, vocabulary_size: usize) -> u32 {
    if density.is_empty() || vocabulary_size == 0 {
        return 0;
    }
    let coverage = density.len() as f64 / vocabulary_size as f64 * 100.0;
    let average = density.values().sum::<f64>() / density.len() as f64;

    (COVERAGE_WEIGHT * coverage + DENSITY_WEIGHT * density_score(average))
        .round()
        .clamp(0.0, 100.0) as u32
}

pub fn formatting_score(content: &str) -> u32 {
    let mut score: i32 = 100;

    if content.contains('\t') {
        score -= 10;
    }
    if REPEATED_SPACES.is_match(content) {
        score -= 5;
    }
    let total = content.chars().count();
    if total > 0 {
        let non_ascii = content.chars().filter(|c| !c.is_ascii()).count();
        if non_ascii as f64 / total as f64 > NON_ASCII_LIMIT {
            score -= 15;
        }
    }
    if !PARAGRAPH_BREAK.is_match(content) {
        score -= 10;
    }

    if BULLET_LINE.is_match(content) {
        score += 5;
    }
    if YEAR.is_match(content) {
        score += 5;
    }
    if EMAIL.is_match(content) {
        score += 5;
    }

    score.clamp(0, 100) as u32
}

/// Points for each structured field that is filled in.
pub fn structure_score(input: &ResumeInput) -> u32 {
    let info = &input.personal_info;
    let mut score = 0;

    if !info.name.trim().is_empty() {
        score += 20;
    }
    if !info.email.trim().is_empty() {
        score += 15;
    }
    if !info.phone.trim().is_empty() {
        score += 10;
    }
    if info.summary.trim().chars().count() >= SUMMARY_MIN_CHARS {
        score += 15;
    }
    if !input.experiences.is_empty() {
        score += 25;
    }
    if !input.education.is_empty() {
        score += 10;
    }
    if !input.skills.is_empty() {
        score += 5;
    }

    score.min(100)
}

/// Piecewise in word count: 300–800 words is ideal.
pub fn length_score(word_count: usize) -> u32 {
    match word_count {
        300..=800 => 100,
        200..=299 | 801..=1000 => 80,
        100..=199 | 1001..=1200 => 60,
        0..=99 => word_count as u32,
        _ => (100.0 - (word_count - 1200) as f64 / 20.0).max(0.0).round() as u32,
    }
}

pub fn readability_points(readability: f64) -> u32 {
    readability.round().clamp(0.0, 100.0) as u32
}

pub fn overall_score(breakdown: &AtsBreakdown, weights: &AtsWeights) -> u32 {
    let weighted = breakdown.keywords as f64 * weights.keywords
        + breakdown.formatting as f64 * weights.formatting
        + breakdown.structure as f64 * weights.structure
        + breakdown.length as f64 * weights.length
        + breakdown.readability as f64 * weights.readability;
    weighted.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn complete_input() -> ResumeInput {
        ResumeInput {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+49 30 1234567".to_string(),
                location: "Berlin".to_string(),
                summary: "Backend engineer with eight years of experience building payment systems."
                    .to_string(),
            },
            experiences: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_density_score_bands() {
        assert_eq!(density_score(0.0), 0.0);
        assert!((density_score(0.5) - 50.0).abs() < 1e-9);
        assert_eq!(density_score(1.0), 100.0);
        assert_eq!(density_score(3.0), 100.0);
        assert!((density_score(4.5) - 70.0).abs() < 1e-9);
        assert_eq!(density_score(10.0), 0.0);
    }

    #[test]
    fn test_keywords_score_combines_coverage_and_density() {
        let density: BTreeMap<String, f64> = (0..10)
            .map(|i| (format!("kw{i}"), 2.0))
            .collect();
        // coverage 10/50 = 20%, density 100 → 0.7*20 + 0.3*100 = 44
        assert_eq!(keywords_score(&density, 50), 44);
        assert_eq!(keywords_score(&BTreeMap::new(), 50), 0);
    }

    #[test]
    fn test_formatting_penalties_and_bonuses() {
        // no paragraph break, nothing else
        assert_eq!(formatting_score("plain text"), 90);
        assert_eq!(formatting_score(""), 90);
        // tab, repeated spaces, no paragraph break
        assert_eq!(formatting_score("a\tb   c"), 75);
        // paragraph break + bullet + year + email, clamped at 100
        let clean = "Jane Doe\njane@example.com\n\n- Shipped v2 in 2023\n";
        assert_eq!(formatting_score(clean), 100);
    }

    #[test]
    fn test_formatting_non_ascii_penalty() {
        assert_eq!(formatting_score("ääääää\n\nab"), 85);
        assert_eq!(formatting_score("Grüße\n\nfrom the team at Example GmbH"), 100);
    }

    #[test]
    fn test_structure_full_and_partial() {
        assert_eq!(structure_score(&complete_input()), 100);

        let mut input = complete_input();
        input.personal_info.summary = "Too short".to_string();
        input.skills.clear();
        assert_eq!(structure_score(&input), 80);

        assert_eq!(structure_score(&ResumeInput::default()), 0);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(length_score(0), 0);
        assert_eq!(length_score(50), 50);
        assert_eq!(length_score(99), 99);
        assert_eq!(length_score(100), 60);
        assert_eq!(length_score(250), 80);
        assert_eq!(length_score(300), 100);
        assert_eq!(length_score(500), 100);
        assert_eq!(length_score(800), 100);
        assert_eq!(length_score(801), 80);
        assert_eq!(length_score(1100), 60);
        assert_eq!(length_score(1400), 90);
        assert_eq!(length_score(5000), 0);
    }

    #[test]
    fn test_overall_is_weighted_sum_of_breakdown() {
        let breakdown = AtsBreakdown {
            keywords: 40,
            formatting: 90,
            structure: 100,
            length: 100,
            readability: 50,
        };
        // 12 + 18 + 25 + 15 + 5
        assert_eq!(overall_score(&breakdown, &AtsWeights::default()), 75);
        assert_eq!(overall_score(&AtsBreakdown::default(), &AtsWeights::default()), 0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = AtsWeights::default();
        let sum = w.keywords + w.formatting + w.structure + w.length + w.readability;
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
