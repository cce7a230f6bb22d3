//! Vendor-neutral pipeline model.
//!
//! Every vendor parser produces these types. They are plain values: built
//! once per parse and never mutated by the parser afterwards.

mod job;
mod runner;
mod step;
mod trigger;

use indexmap::IndexMap;
use serde::Serialize;

pub use job::{Condition, Job, Metadata, Permission, PermissionLevel, TokenPermissions};
pub use runner::{DockerMetadata, Runner};
pub use step::{Shell, Step, StepType, Task, VersionType};
pub use trigger::{EventType, Filter, Trigger};

pub type EnvironmentVariables = IndexMap<String, serde_yaml::Value>;

/// A named input accepted by a trigger, task or reusable workflow.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Parameter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub default: Option<serde_yaml::Value>,
    pub value: Option<serde_yaml::Value>,
}

/// Source span of a model element inside its pipeline file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLocation {
    pub path: String,
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
}

/// A fully normalized pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pipeline {
    pub triggers: Vec<Trigger>,
    pub jobs: Vec<Job>,
}
