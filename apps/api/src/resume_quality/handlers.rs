//! Axum route handlers for the resume quality API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeAnalytics, ResumeInput,
};
use crate::models::Language;
use crate::resume_quality::analyzer::analyze_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub content: String,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub language: Language,
    #[serde(flatten)]
    pub analytics: ResumeAnalytics,
}

/// POST /api/v1/resumes/analyze
///
/// Empty content is accepted and scored; only oversized input is rejected.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let mut input = ResumeInput {
        content: request.content,
        personal_info: request.personal_info,
        experiences: request.experiences,
        education: request.education,
        skills: request.skills,
        language: Language::default(),
    };
    state.check_input_sizes(input.text_fields())?;

    let language = state.resolve_language(request.language, &input.content);
    input.language = language;
    let analytics = analyze_resume(&input, state.config.skill_match_rule);

    info!(
        %language,
        word_count = analytics.word_count,
        overall = analytics.ats_score.overall,
        "analyzed resume"
    );

    Ok(Json(AnalyzeResumeResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        language,
        analytics,
    }))
}
