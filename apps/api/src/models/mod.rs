pub mod job;
pub mod language;
pub mod resume;

pub use language::Language;
