use log::info;

use crate::error::Result;
use crate::models::Pipeline;

use super::jobs::parse_workflow_jobs;
use super::schema::Workflow;
use super::triggers::parse_workflow_triggers;

/// Parses a GitHub Actions workflow document into a canonical pipeline.
///
/// Triggers and jobs are normalized against the same loaded workflow. The
/// first failure aborts the parse; a pipeline is only returned whole.
///
/// # Errors
///
/// Returns [`crate::CINormError::InvalidYaml`] when the document does not load,
/// or the first error raised by trigger or job normalization.
pub fn parse(data: &[u8]) -> Result<Pipeline> {
    let workflow = Workflow::from_slice(data)?;

    let triggers = parse_workflow_triggers(&workflow)?;
    let jobs = parse_workflow_jobs(&workflow)?;

    info!(
        "Parsed workflow {}: {} triggers, {} jobs",
        workflow.name.as_deref().unwrap_or("<unnamed>"),
        triggers.len(),
        jobs.len()
    );

    Ok(Pipeline { triggers, jobs })
}
