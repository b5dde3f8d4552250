//! Job posting parser: free text in, `ParsedJobPosting` out.
//!
//! Pure and deterministic. No input can make it fail; fields that cannot be
//! found are left as `None` or empty lists.

use tracing::debug;

use crate::job_posting::extract::{
    COMPANY, EDUCATION, EXPERIENCE, JOB_TYPE, LOCATION, SALARY, TITLE,
};
use crate::job_posting::sections::{extract_benefits, extract_description, extract_requirements};
use crate::job_posting::skills::{extract_skills, mentions_remote};
use crate::matching::MatchRule;
use crate::models::job::ParsedJobPosting;
use crate::models::Language;
use crate::vocabulary::vocabulary;

/// `rule` governs the vocabulary skill scan only.
pub fn parse_job_posting(text: &str, language: Language, rule: MatchRule) -> ParsedJobPosting {
    let vocab = vocabulary(language);

    let posting = ParsedJobPosting {
        title: TITLE.run(text, vocab),
        company: COMPANY.run(text, vocab),
        location: LOCATION.run(text, vocab),
        description: extract_description(text, vocab),
        requirements: extract_requirements(text, vocab),
        skills: extract_skills(text, vocab, rule),
        experience: EXPERIENCE.run(text, vocab),
        education: EDUCATION.run(text, vocab),
        benefits: extract_benefits(text, vocab),
        salary: SALARY.run(text, vocab),
        job_type: JOB_TYPE.run(text, vocab),
        remote: mentions_remote(text, vocab),
        language,
    };

    debug!(
        language = %language,
        skills = posting.skills.len(),
        requirements = posting.requirements.len(),
        benefits = posting.benefits.len(),
        remote = posting.remote,
        "parsed job posting"
    );

    posting
}
