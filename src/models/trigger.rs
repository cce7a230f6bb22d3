use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::{FileLocation, Parameter};

/// Canonical event classification.
///
/// Backed by a string so vendor events without a canonical counterpart
/// survive normalization verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventType(pub String);

impl EventType {
    pub const PUSH: &'static str = "push";
    pub const PULL_REQUEST: &'static str = "pull_request";
    pub const FORK: &'static str = "fork";
    pub const MANUAL: &'static str = "manual";
    pub const PIPELINE_TRIGGER: &'static str = "pipeline_trigger";
    pub const PIPELINE_RUN: &'static str = "pipeline_run";
    pub const SCHEDULED: &'static str = "scheduled";

    pub fn new(event: impl Into<String>) -> Self {
        Self(event.into())
    }

    pub fn push() -> Self {
        Self::new(Self::PUSH)
    }

    pub fn pull_request() -> Self {
        Self::new(Self::PULL_REQUEST)
    }

    pub fn fork() -> Self {
        Self::new(Self::FORK)
    }

    pub fn manual() -> Self {
        Self::new(Self::MANUAL)
    }

    pub fn pipeline_trigger() -> Self {
        Self::new(Self::PIPELINE_TRIGGER)
    }

    pub fn pipeline_run() -> Self {
        Self::new(Self::PIPELINE_RUN)
    }

    pub fn scheduled() -> Self {
        Self::new(Self::SCHEDULED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allow/deny pattern lists restricting a trigger.
///
/// Both lists are always present once a filter is attached; an empty list
/// means "no patterns", never "not configured".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Filter {
    pub allow_list: Vec<String>,
    pub deny_list: Vec<String>,
}

/// A condition under which the pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    /// Canonical or passed-through vendor event
    pub event: EventType,
    /// Branch filter, attached only for git-like events
    pub branches: Option<Filter>,
    /// Path filter, attached only for git-like events
    pub paths: Option<Filter>,
    /// Inputs accepted by manual and pipeline-call triggers
    pub parameters: Vec<Parameter>,
    /// Upstream pipelines whose completion fires this trigger
    pub pipelines: Vec<String>,
    /// Event-specific filters without a dedicated field (activity types, tags)
    pub filters: IndexMap<String, serde_yaml::Value>,
    /// Cron expressions for scheduled triggers
    pub schedules: Option<Vec<String>>,
    pub disabled: Option<bool>,
    pub file_location: Option<FileLocation>,
}

impl Trigger {
    /// Creates a trigger carrying nothing but its event.
    pub fn new(event: EventType) -> Self {
        Self {
            event,
            branches: None,
            paths: None,
            parameters: Vec::new(),
            pipelines: Vec::new(),
            filters: IndexMap::new(),
            schedules: None,
            disabled: None,
            file_location: None,
        }
    }
}
