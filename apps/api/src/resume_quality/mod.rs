pub mod analyzer;
pub mod ats;
pub mod feedback;
pub mod handlers;
pub mod metrics;
