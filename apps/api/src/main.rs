mod config;
mod detect;
mod errors;
mod job_posting;
mod matching;
mod models;
mod resume_quality;
mod routes;
mod state;
mod vocabulary;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::Language;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvlens API v{}", env!("CARGO_PKG_VERSION"));

    // Build the vocabularies up front so the first request does not pay for regex compilation
    for vocab in [Language::En, Language::De].map(vocabulary::vocabulary) {
        info!(
            language = %vocab.language,
            skills = vocab.skills.len(),
            ats_keywords = vocab.ats_keywords.len(),
            "Vocabulary loaded"
        );
    }

    let state = AppState::new(config.clone());
    info!(
        scorer = state.match_scorer.backend(),
        rule = %config.skill_match_rule,
        default_language = %config.default_language,
        max_input_chars = config.max_input_chars,
        "Analyzers configured"
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
