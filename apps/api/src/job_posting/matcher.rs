//! Job match scoring: compares a candidate's declared skills against the skills
//! inferred from a parsed job posting.
//!
//! Default: `SkillOverlapScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchScorer>` so the scoring backend can change
//! without touching handlers.

use tracing::debug;

use crate::matching::MatchRule;
use crate::models::job::{JobMatchAnalysis, ParsedJobPosting, SkillImportance, SkillMatch};
use crate::models::resume::ExperienceEntry;
use crate::vocabulary::{vocabulary, Vocabulary};

const MAX_LISTED_SKILLS: usize = 3;

pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        resume_skills: &[String],
        resume_experience: &[ExperienceEntry],
        posting: &ParsedJobPosting,
    ) -> JobMatchAnalysis;

    /// Reported in logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Fraction of posting skills covered by at least one resume skill.
///
/// A resume skill covers a job skill when either contains the other under
/// `rule`. Experience entries are accepted but do not affect the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillOverlapScorer {
    pub rule: MatchRule,
}

impl MatchScorer for SkillOverlapScorer {
    fn score(
        &self,
        resume_skills: &[String],
        resume_experience: &[ExperienceEntry],
        posting: &ParsedJobPosting,
    ) -> JobMatchAnalysis {
        analyze_job_match(self.rule, resume_skills, resume_experience, posting)
    }

    fn backend(&self) -> &'static str {
        "skill_overlap"
    }
}

pub fn analyze_job_match(
    rule: MatchRule,
    resume_skills: &[String],
    _resume_experience: &[ExperienceEntry],
    posting: &ParsedJobPosting,
) -> JobMatchAnalysis {
    let vocab = vocabulary(posting.language);

    let skill_matches: Vec<SkillMatch> = posting
        .skills
        .iter()
        .map(|skill| SkillMatch {
            skill: skill.clone(),
            matched: resume_skills.iter().any(|own| rule.overlaps(own, skill)),
            importance: importance_of(skill, vocab),
        })
        .collect();

    let missing_skills: Vec<String> = skill_matches
        .iter()
        .filter(|m| !m.matched)
        .map(|m| m.skill.clone())
        .collect();

    let matched_count = skill_matches.len() - missing_skills.len();
    let overall_match = overall_match(matched_count, skill_matches.len());

    let recommendations = build_recommendations(&skill_matches, &missing_skills, posting, vocab);

    let tailored_summary = vocab
        .messages
        .tailored_summary
        .replace("{title}", posting.title_or_placeholder())
        .replace("{company}", posting.company_or_placeholder())
        .replace("{score}", &overall_match.to_string());

    debug!(
        job_skills = skill_matches.len(),
        matched = matched_count,
        overall_match,
        "scored job match"
    );

    JobMatchAnalysis {
        overall_match,
        skill_matches,
        missing_skills,
        recommendations,
        tailored_summary,
    }
}

pub fn importance_of(skill: &str, vocab: &Vocabulary) -> SkillImportance {
    let listed = |tier: &[&str]| tier.iter().any(|s| s.eq_ignore_ascii_case(skill));
    if listed(vocab.high_importance) {
        SkillImportance::High
    } else if listed(vocab.medium_importance) {
        SkillImportance::Medium
    } else {
        SkillImportance::Low
    }
}

fn overall_match(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Missing-skills hint, then matched high-importance hint, then remote hint.
fn build_recommendations(
    skill_matches: &[SkillMatch],
    missing_skills: &[String],
    posting: &ParsedJobPosting,
    vocab: &Vocabulary,
) -> Vec<String> {
    let messages = &vocab.messages;
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        let listed: Vec<&str> = missing_skills
            .iter()
            .take(MAX_LISTED_SKILLS)
            .map(String::as_str)
            .collect();
        recommendations.push(messages.missing_skills.replace("{skills}", &listed.join(", ")));
    }

    let strong: Vec<&str> = skill_matches
        .iter()
        .filter(|m| m.matched && m.importance == SkillImportance::High)
        .take(MAX_LISTED_SKILLS)
        .map(|m| m.skill.as_str())
        .collect();
    if !strong.is_empty() {
        recommendations.push(messages.emphasize_skills.replace("{skills}", &strong.join(", ")));
    }

    if posting.remote {
        recommendations.push(messages.remote_experience.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_posting::parser::parse_job_posting;
    use crate::models::Language;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn posting_with(job_skills: &[&str]) -> ParsedJobPosting {
        ParsedJobPosting {
            title: Some("Backend Engineer".to_string()),
            company: Some("Acme Corp".to_string()),
            skills: skills(job_skills),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_of_three_skills_scores_33() {
        let posting = posting_with(&["Python", "AWS", "Docker"]);
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["Python", "SQL"]), &[], &posting);
        assert_eq!(analysis.overall_match, 33);
        assert_eq!(analysis.missing_skills, vec!["AWS", "Docker"]);
        assert!(analysis.skill_matches[0].matched);
        assert!(!analysis.skill_matches[1].matched);
    }

    #[test]
    fn test_no_job_skills_scores_zero() {
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["Python"]), &[], &posting_with(&[]));
        assert_eq!(analysis.overall_match, 0);
        assert!(analysis.skill_matches.is_empty());
        assert!(analysis.missing_skills.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_and_bidirectional() {
        let posting = posting_with(&["React", "Node.js"]);
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["react native", "node.js"]), &[], &posting);
        assert_eq!(analysis.overall_match, 100);
        assert!(analysis.missing_skills.is_empty());
    }

    #[test]
    fn test_word_boundary_rule_does_not_match_java_to_javascript() {
        let posting = posting_with(&["JavaScript"]);
        let strict = analyze_job_match(MatchRule::WordBoundary, &skills(&["Java"]), &[], &posting);
        assert_eq!(strict.overall_match, 0);

        let permissive =
            analyze_job_match(MatchRule::Substring, &skills(&["Java"]), &[], &posting);
        assert_eq!(permissive.overall_match, 100);
    }

    #[test]
    fn test_adding_missing_skill_never_lowers_score() {
        let posting = posting_with(&["Python", "AWS", "Docker", "Figma"]);
        let mut resume = skills(&["Python"]);
        let before = analyze_job_match(MatchRule::WordBoundary, &resume, &[], &posting);

        resume.push("AWS".to_string());
        let after = analyze_job_match(MatchRule::WordBoundary, &resume, &[], &posting);

        assert!(after.overall_match > before.overall_match);
        assert!(before.missing_skills.contains(&"AWS".to_string()));
        assert!(!after.missing_skills.contains(&"AWS".to_string()));
        assert!(after.skill_matches.iter().any(|m| m.skill == "AWS" && m.matched));
    }

    #[test]
    fn test_experience_does_not_change_score() {
        let posting = posting_with(&["Python", "AWS"]);
        let experience = vec![ExperienceEntry {
            title: "Cloud Engineer".to_string(),
            description: "Ran AWS infrastructure".to_string(),
            ..Default::default()
        }];
        let with = analyze_job_match(MatchRule::WordBoundary, &skills(&["Python"]), &experience, &posting);
        let without = analyze_job_match(MatchRule::WordBoundary, &skills(&["Python"]), &[], &posting);
        assert_eq!(with, without);
    }

    #[test]
    fn test_importance_tiers() {
        let vocab = vocabulary(Language::En);
        assert_eq!(importance_of("python", vocab), SkillImportance::High);
        assert_eq!(importance_of("Git", vocab), SkillImportance::Medium);
        assert_eq!(importance_of("Figma", vocab), SkillImportance::Low);
    }

    #[test]
    fn test_recommendations_order_and_limits() {
        let mut posting = posting_with(&[
            "Python", "Java", "Go", "React", "Rust", "PHP", "Ruby", "Swift",
        ]);
        posting.remote = true;
        let analysis =
            analyze_job_match(MatchRule::WordBoundary, &skills(&["Python", "Java", "Go", "React"]), &[], &posting);

        assert_eq!(analysis.recommendations.len(), 3);
        assert!(analysis.recommendations[0].contains("Rust, PHP, Ruby"));
        assert!(!analysis.recommendations[0].contains("Swift"));
        assert!(analysis.recommendations[1].contains("Python, Java, Go"));
        assert!(!analysis.recommendations[1].contains("React"));
        assert!(analysis.recommendations[2].contains("remote"));
    }

    #[test]
    fn test_recommendations_skip_untriggered_hints() {
        let posting = posting_with(&["Figma"]);
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["Figma"]), &[], &posting);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_tailored_summary_interpolates_fields() {
        let posting = posting_with(&["Python", "AWS"]);
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["Python"]), &[], &posting);
        assert!(analysis.tailored_summary.contains("Backend Engineer"));
        assert!(analysis.tailored_summary.contains("Acme Corp"));
        assert!(analysis.tailored_summary.contains("50%"));
    }

    #[test]
    fn test_german_summary_uses_placeholders() {
        let posting = ParsedJobPosting {
            language: Language::De,
            ..Default::default()
        };
        let analysis = analyze_job_match(MatchRule::WordBoundary, &[], &[], &posting);
        assert!(analysis.tailored_summary.contains("Unbekannte Position"));
        assert!(analysis.tailored_summary.contains("Unbekanntes Unternehmen"));
    }

    #[test]
    fn test_end_to_end_with_parsed_posting() {
        let posting = parse_job_posting(
            "Job Title: Data Engineer\nRequirements:\n- Python and SQL\n- AWS or Azure",
            Language::En,
            MatchRule::WordBoundary,
        );
        let analysis = analyze_job_match(MatchRule::WordBoundary, &skills(&["python", "sql"]), &[], &posting);
        assert_eq!(posting.skills, vec!["Python", "SQL", "AWS", "Azure"]);
        assert_eq!(analysis.overall_match, 50);
    }

    #[test]
    fn test_scorer_trait_object_delegates() {
        let scorer: Box<dyn MatchScorer> = Box::new(SkillOverlapScorer::default());
        let posting = posting_with(&["Docker"]);
        let analysis = scorer.score(&skills(&["docker"]), &[], &posting);
        assert_eq!(analysis.overall_match, 100);
        assert_eq!(scorer.backend(), "skill_overlap");
    }
}
