use indexmap::IndexMap;
use serde_yaml::Value;

use crate::models::{Condition, Parameter, Shell, Step, StepType, Task, VersionType};

use super::schema::{self, BoolOrExpr, NumberOrExpr};

pub fn parse_job_steps(steps: &[schema::Step]) -> Vec<Step> {
    steps.iter().map(parse_job_step).collect()
}

fn parse_job_step(step: &schema::Step) -> Step {
    let (step_type, task, shell) = match &step.uses {
        Some(reference) => (
            StepType::Task,
            Some(parse_task(reference, step.with.as_ref())),
            None,
        ),
        None => (
            StepType::Shell,
            None,
            step.run.as_ref().map(|script| Shell {
                shell_type: step.shell.clone(),
                script: script.clone(),
            }),
        ),
    };

    Step {
        id: step.id.clone(),
        name: step.name.clone(),
        step_type,
        task,
        shell,
        environment_variables: step.env.clone(),
        working_directory: step.working_directory.clone(),
        timeout_ms: step
            .timeout_minutes
            .as_ref()
            .and_then(NumberOrExpr::literal)
            .map(|m| m.saturating_mul(60_000)),
        continue_on_error: step.continue_on_error.as_ref().and_then(BoolOrExpr::literal),
        conditions: step
            .if_condition
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| vec![Condition::from(c)]),
    }
}

/// Builds the single step standing in for a job that calls a reusable
/// workflow.
pub fn parse_reusable_workflow_step(reference: &str) -> Step {
    Step {
        id: None,
        name: None,
        step_type: StepType::Task,
        task: Some(parse_task(reference, None)),
        shell: None,
        environment_variables: None,
        working_directory: None,
        timeout_ms: None,
        continue_on_error: None,
        conditions: None,
    }
}

/// Splits an action or workflow reference (`owner/repo/path@ref`) into its
/// name and pinned version.
pub fn parse_task(reference: &str, with: Option<&IndexMap<String, Value>>) -> Task {
    let (name, version) = if reference.starts_with("docker://") || reference.starts_with("./") {
        (reference.to_string(), None)
    } else {
        match reference.rsplit_once('@') {
            Some((name, version)) if !version.is_empty() => {
                (name.to_string(), Some(version.to_string()))
            }
            _ => (reference.to_string(), None),
        }
    };

    let version_type = version.as_deref().map_or(VersionType::None, version_type);

    Task {
        name,
        version,
        version_type,
        inputs: with.map(parse_with_inputs),
    }
}

pub fn parse_with_inputs(with: &IndexMap<String, Value>) -> Vec<Parameter> {
    with.iter()
        .map(|(name, value)| Parameter {
            name: Some(name.clone()),
            value: Some(value.clone()),
            ..Parameter::default()
        })
        .collect()
}

fn version_type(version: &str) -> VersionType {
    if version.len() == 40 && version.chars().all(|c| c.is_ascii_hexdigit()) {
        return VersionType::Commit;
    }

    let numeric = version.strip_prefix('v').unwrap_or(version);
    let looks_like_tag = numeric.starts_with(|c: char| c.is_ascii_digit())
        && numeric
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'));
    if looks_like_tag {
        VersionType::Tag
    } else {
        VersionType::Branch
    }
}
