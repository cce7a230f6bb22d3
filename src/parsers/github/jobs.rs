use indexmap::IndexMap;
use log::debug;

use crate::error::Result;
use crate::models::{Condition, Job, Metadata, Step};

use super::permissions::parse_token_permissions;
use super::runner::parse_runner;
use super::schema::{self, BoolOrExpr, Concurrency, NumberOrExpr, Workflow};
use super::steps::{parse_job_steps, parse_reusable_workflow_step, parse_with_inputs};

/// Timeout GitHub applies to jobs that do not set `timeout-minutes`.
pub const DEFAULT_TIMEOUT_MS: u64 = 360 * 60 * 1000;

/// Normalizes every job of the workflow.
///
/// Jobs are independent of each other; the first failing job aborts the
/// whole batch and no jobs are returned.
///
/// # Errors
///
/// Returns the first error raised while normalizing a job, such as
/// [`crate::CINormError::InvalidPermission`].
pub fn parse_workflow_jobs(workflow: &Workflow) -> Result<Vec<Job>> {
    parse_jobs(&workflow.jobs)
}

pub(super) fn parse_jobs(jobs: &IndexMap<String, schema::Job>) -> Result<Vec<Job>> {
    debug!("Normalizing {} jobs", jobs.len());
    jobs.iter().map(|(key, job)| parse_job(key, job)).collect()
}

fn parse_job(key: &str, job: &schema::Job) -> Result<Job> {
    let token_permissions = job
        .permissions
        .as_ref()
        .map(parse_token_permissions)
        .transpose()?;

    let id = job.id.clone().unwrap_or_else(|| key.to_string());
    let name = match job.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => id.clone(),
    };

    let steps = match &job.uses {
        Some(workflow) => Some(vec![parse_reusable_workflow_step(workflow)]),
        None => job.steps.as_deref().map(parse_job_steps),
    };
    let metadata = classify_job(&id, &name, steps.as_deref().unwrap_or_default());

    Ok(Job {
        id: Some(id),
        name: Some(name),
        steps,
        pre_steps: None,
        post_steps: None,
        continue_on_error: job.continue_on_error.as_ref().and_then(BoolOrExpr::literal),
        environment_variables: job.env.clone(),
        runner: parse_runner(job.runs_on.as_ref(), job.container.as_ref()),
        conditions: job
            .if_condition
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| vec![Condition::from(c)]),
        concurrency_group: job.concurrency.as_ref().and_then(concurrency_group),
        inputs: job.with.as_ref().map(parse_with_inputs),
        timeout_ms: Some(timeout_ms(
            job.timeout_minutes.as_ref().and_then(NumberOrExpr::literal),
        )),
        tags: None,
        token_permissions,
        dependencies: job.needs.as_ref().map(schema::OneOrMany::to_vec),
        metadata,
    })
}

// A zero-minute or expression timeout falls back to the default, same as an
// unset one.
// TODO: decide whether `timeout-minutes: 0` should instead produce a zero timeout.
fn timeout_ms(minutes: Option<u64>) -> u64 {
    match minutes {
        None | Some(0) => DEFAULT_TIMEOUT_MS,
        Some(minutes) => minutes.saturating_mul(60 * 1000),
    }
}

fn concurrency_group(concurrency: &Concurrency) -> Option<String> {
    match concurrency {
        Concurrency::Group(group) => Some(group.clone()),
        Concurrency::Config(config) => config.group.clone(),
    }
}

fn classify_job(id: &str, name: &str, steps: &[Step]) -> Metadata {
    let mut names: Vec<String> = vec![id.to_lowercase(), name.to_lowercase()];
    for step in steps {
        if let Some(step_name) = &step.name {
            names.push(step_name.to_lowercase());
        }
        if let Some(task) = &step.task {
            names.push(task.name.to_lowercase());
        }
    }

    let has_keyword = |keywords: &[&str]| {
        names
            .iter()
            .any(|name| keywords.iter().any(|kw| name.contains(kw)))
    };

    Metadata {
        build: has_keyword(&["build", "compile", "package"]),
        test: has_keyword(&["test", "lint", "check", "coverage"]),
        deploy: has_keyword(&["deploy", "release", "publish"]),
    }
}
