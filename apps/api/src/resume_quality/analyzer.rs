use tracing::debug;

use crate::matching::MatchRule;
use crate::models::resume::{AtsBreakdown, AtsScore, ResumeAnalytics, ResumeInput, SectionAnalysis};
use crate::resume_quality::ats::{
    formatting_score, keywords_score, length_score, overall_score, readability_points,
    structure_score, AtsWeights,
};
use crate::resume_quality::feedback::{ats_feedback, suggestions};
use crate::resume_quality::metrics::{character_count, keyword_density, readability, round2, word_count};
use crate::vocabulary::vocabulary;

/// Scores a resume for ATS friendliness. `rule` governs keyword counting.
///
/// Pure function of its input: empty content yields zero counts and default
/// messages, never an error.
pub fn analyze_resume(input: &ResumeInput, rule: MatchRule) -> ResumeAnalytics {
    let vocab = vocabulary(input.language);
    let content = input.content.as_str();

    let word_count = word_count(content);
    let character_count = character_count(content);
    let readability = readability(content, input.language);
    let keyword_density = keyword_density(content, vocab, rule);
    let section_analysis = section_analysis(input);

    let breakdown = AtsBreakdown {
        keywords: keywords_score(&keyword_density, vocab.ats_keywords.len()),
        formatting: formatting_score(content),
        structure: structure_score(input),
        length: length_score(word_count),
        readability: readability_points(readability),
    };
    let overall = overall_score(&breakdown, &AtsWeights::default());
    let feedback = ats_feedback(&breakdown, word_count, vocab);
    let suggestions = suggestions(&section_analysis, overall, &input.experiences, vocab);

    debug!(
        language = %input.language,
        word_count,
        keywords = breakdown.keywords,
        formatting = breakdown.formatting,
        structure = breakdown.structure,
        length = breakdown.length,
        readability = breakdown.readability,
        overall,
        "analyzed resume"
    );

    ResumeAnalytics {
        word_count,
        character_count,
        readability_score: round2(readability),
        keyword_density,
        section_analysis,
        ats_score: AtsScore {
            overall,
            breakdown,
            recommendations: feedback.recommendations,
            strengths: feedback.strengths,
            weaknesses: feedback.weaknesses,
        },
        suggestions,
    }
}

fn section_analysis(input: &ResumeInput) -> SectionAnalysis {
    let info = &input.personal_info;
    SectionAnalysis {
        has_summary: !info.summary.trim().is_empty(),
        has_experience: !input.experiences.is_empty(),
        has_education: !input.education.is_empty(),
        has_skills: !input.skills.is_empty(),
        has_contact: !info.email.trim().is_empty() && !info.phone.trim().is_empty(),
    }
}
