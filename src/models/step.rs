use serde::Serialize;

use super::{Condition, EnvironmentVariables, Parameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Invokes a reusable action, task or workflow
    Task,
    /// Runs an inline script
    Shell,
}

/// How a task reference pins its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Commit,
    Tag,
    Branch,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub name: String,
    pub version: Option<String>,
    pub version_type: VersionType,
    pub inputs: Option<Vec<Parameter>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shell {
    pub shell_type: Option<String>,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub id: Option<String>,
    pub name: Option<String>,
    pub step_type: StepType,
    pub task: Option<Task>,
    pub shell: Option<Shell>,
    pub environment_variables: Option<EnvironmentVariables>,
    pub working_directory: Option<String>,
    pub timeout_ms: Option<u64>,
    pub continue_on_error: Option<bool>,
    pub conditions: Option<Vec<Condition>>,
}
