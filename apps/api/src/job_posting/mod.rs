pub mod extract;
pub mod handlers;
pub mod matcher;
pub mod parser;
pub mod sections;
pub mod skills;
