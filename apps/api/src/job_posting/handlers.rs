//! Axum route handlers for the job posting API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::detect::detect_language;
use crate::errors::AppError;
use crate::job_posting::parser::parse_job_posting;
use crate::models::job::{JobMatchAnalysis, ParsedJobPosting};
use crate::models::resume::ExperienceEntry;
use crate::models::Language;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseJobPostingRequest {
    pub text: String,
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub resume_experience: Vec<ExperienceEntry>,
    /// Already-parsed posting. Exactly one of `job_posting` / `job_text` must be set.
    pub job_posting: Option<ParsedJobPosting>,
    pub job_text: Option<String>,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub scorer: &'static str,
    pub analysis: JobMatchAnalysis,
    pub job_posting: ParsedJobPosting,
}

#[derive(Debug, Deserialize)]
pub struct DetectLanguageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectLanguageResponse {
    pub language: Language,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/job-postings/parse
///
/// Extracts a structured posting from free text. Missing fields come back as null.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseJobPostingRequest>,
) -> Result<Json<ParsedJobPosting>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    state.check_input_size(&request.text)?;

    let language = state.resolve_language(request.language, &request.text);
    let posting = parse_job_posting(&request.text, language, state.config.skill_match_rule);

    info!(
        %language,
        skills = posting.skills.len(),
        requirements = posting.requirements.len(),
        "parsed job posting"
    );

    Ok(Json(posting))
}

/// POST /api/v1/job-postings/match
///
/// Scores resume skills against a posting, parsing `job_text` first when given.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    state.check_input_sizes(request.resume_skills.iter().map(String::as_str))?;
    state.check_input_sizes(
        request
            .resume_experience
            .iter()
            .flat_map(|entry| entry.text_fields()),
    )?;

    let job_posting = match (request.job_posting, request.job_text) {
        (Some(mut posting), None) => {
            state.check_input_sizes(posting.text_fields())?;
            if let Some(language) = request.language {
                posting.language = language;
            }
            posting
        }
        (None, Some(text)) => {
            if text.trim().is_empty() {
                return Err(AppError::Validation("job_text cannot be empty".to_string()));
            }
            state.check_input_size(&text)?;
            let language = state.resolve_language(request.language, &text);
            parse_job_posting(&text, language, state.config.skill_match_rule)
        }
        (Some(_), Some(_)) => {
            return Err(AppError::Validation(
                "provide either job_posting or job_text, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(AppError::Validation(
                "one of job_posting or job_text is required".to_string(),
            ))
        }
    };

    let analysis = state.match_scorer.score(
        &request.resume_skills,
        &request.resume_experience,
        &job_posting,
    );

    info!(
        scorer = state.match_scorer.backend(),
        title = job_posting.title_or_placeholder(),
        location = job_posting.location_or_placeholder(),
        overall_match = analysis.overall_match,
        missing = analysis.missing_skills.len(),
        "scored job match"
    );

    Ok(Json(MatchResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        scorer: state.match_scorer.backend(),
        analysis,
        job_posting,
    }))
}

/// POST /api/v1/language/detect
pub async fn handle_detect_language(
    State(state): State<AppState>,
    Json(request): Json<DetectLanguageRequest>,
) -> Result<Json<DetectLanguageResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    state.check_input_size(&request.text)?;
    Ok(Json(DetectLanguageResponse {
        language: detect_language(&request.text),
    }))
}
