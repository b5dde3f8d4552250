pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::job_posting::handlers as job_posting;
use crate::resume_quality::handlers as resume_quality;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job posting API
        .route("/api/v1/job-postings/parse", post(job_posting::handle_parse))
        .route("/api/v1/job-postings/match", post(job_posting::handle_match))
        // Resume quality API
        .route("/api/v1/resumes/analyze", post(resume_quality::handle_analyze))
        // Utilities
        .route(
            "/api/v1/language/detect",
            post(job_posting::handle_detect_language),
        )
        .with_state(state)
}
