//! Text feedback derived from fixed thresholds on each ATS dimension.

use crate::models::resume::{AtsBreakdown, ExperienceEntry, SectionAnalysis};
use crate::vocabulary::Vocabulary;

const LENGTH_IDEAL_MIN_WORDS: usize = 300;
const PASSING_OVERALL: u32 = 70;

#[derive(Debug, Default, PartialEq)]
pub struct Feedback {
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Each dimension is judged independently; a score can be neither strength nor weakness.
pub fn ats_feedback(breakdown: &AtsBreakdown, word_count: usize, vocab: &Vocabulary) -> Feedback {
    let m = &vocab.messages;
    let mut feedback = Feedback::default();

    let mut judge = |score: u32,
                     recommend_below: u32,
                     strong_from: u32,
                     weak_below: u32,
                     recommendation: &str,
                     strength: &str,
                     weakness: &str| {
        if score < recommend_below {
            feedback.recommendations.push(recommendation.to_string());
        }
        if score >= strong_from {
            feedback.strengths.push(strength.to_string());
        }
        if score < weak_below {
            feedback.weaknesses.push(weakness.to_string());
        }
    };

    judge(
        breakdown.keywords,
        70,
        80,
        50,
        m.keywords_recommendation,
        m.keywords_strength,
        m.keywords_weakness,
    );
    judge(
        breakdown.formatting,
        80,
        90,
        70,
        m.formatting_recommendation,
        m.formatting_strength,
        m.formatting_weakness,
    );
    judge(
        breakdown.structure,
        80,
        90,
        60,
        m.structure_recommendation,
        m.structure_strength,
        m.structure_weakness,
    );
    let length_recommendation = if word_count < LENGTH_IDEAL_MIN_WORDS {
        m.length_expand_recommendation
    } else {
        m.length_condense_recommendation
    };
    judge(
        breakdown.length,
        70,
        100,
        60,
        length_recommendation,
        m.length_strength,
        m.length_weakness,
    );
    judge(
        breakdown.readability,
        50,
        60,
        30,
        m.readability_recommendation,
        m.readability_strength,
        m.readability_weakness,
    );

    feedback
}

/// General hints from section gaps, the overall score and unquantified experience.
pub fn suggestions(
    sections: &SectionAnalysis,
    overall: u32,
    experiences: &[ExperienceEntry],
    vocab: &Vocabulary,
) -> Vec<String> {
    let m = &vocab.messages;
    let mut suggestions = Vec::new();

    if !sections.has_summary {
        suggestions.push(m.add_summary.to_string());
    }
    if !sections.has_skills {
        suggestions.push(m.add_skills.to_string());
    }
    if overall < PASSING_OVERALL {
        suggestions.push(m.raise_score.to_string());
    }
    if experiences
        .iter()
        .any(|e| !e.description.trim().is_empty() && !is_quantified(&e.description))
    {
        suggestions.push(m.quantify_achievements.to_string());
    }

    suggestions
}

/// A description is quantified when it carries a number, percentage or currency amount.
pub fn is_quantified(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£'))
}
