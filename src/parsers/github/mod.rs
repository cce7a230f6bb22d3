//! GitHub Actions workflow parser.

mod jobs;
mod parser;
mod permissions;
mod runner;
pub mod schema;
mod steps;
mod triggers;
#[cfg(test)]
mod tests;

pub use jobs::{parse_workflow_jobs, DEFAULT_TIMEOUT_MS};
pub use parser::parse;
pub use permissions::parse_token_permissions;
pub use triggers::parse_workflow_triggers;
