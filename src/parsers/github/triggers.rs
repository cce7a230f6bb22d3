use log::debug;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::{CINormError, Result};
use crate::models::{EventType, Filter, Parameter, Trigger};

use super::schema::{describe, GitEvent, Inputs, On, Schedule, Workflow, WorkflowCall, WorkflowDispatch, WorkflowRun};

const PUSH_EVENT: &str = "push";
const FORK_EVENT: &str = "fork";
const PULL_REQUEST_EVENT: &str = "pull_request";
const PULL_REQUEST_TARGET_EVENT: &str = "pull_request_target";
const WORKFLOW_DISPATCH_EVENT: &str = "workflow_dispatch";
const WORKFLOW_CALL_EVENT: &str = "workflow_call";
const WORKFLOW_RUN_EVENT: &str = "workflow_run";
const SCHEDULE_EVENT: &str = "schedule";

/// Translates a GitHub event name into its canonical event. Names without a
/// canonical counterpart pass through unchanged.
fn github_event_to_model_event(event: &str) -> EventType {
    match event {
        PUSH_EVENT => EventType::push(),
        FORK_EVENT => EventType::fork(),
        WORKFLOW_DISPATCH_EVENT => EventType::manual(),
        PULL_REQUEST_EVENT => EventType::pull_request(),
        SCHEDULE_EVENT => EventType::scheduled(),
        WORKFLOW_CALL_EVENT => EventType::pipeline_trigger(),
        WORKFLOW_RUN_EVENT => EventType::pipeline_run(),
        other => EventType::new(other),
    }
}

/// Normalizes the workflow's `on` block.
///
/// The block is probed in a fixed order: a single event name, a list of
/// event names, then an event map. Anything else is rejected.
///
/// # Errors
///
/// Returns [`CINormError::TriggerDecode`] when the block has none of the
/// recognized shapes or an event's configuration does not decode, and
/// [`CINormError::InvalidYamlTag`] when a YAML tag is attached to it.
pub fn parse_workflow_triggers(workflow: &Workflow) -> Result<Vec<Trigger>> {
    parse_triggers(workflow.on.as_ref())
}

pub(super) fn parse_triggers(on: Option<&Value>) -> Result<Vec<Trigger>> {
    let Some(on) = on else {
        return Ok(Vec::new());
    };

    match on {
        Value::Null => Ok(Vec::new()),
        Value::String(event) => Ok(generate_triggers_from_events([event.as_str()])),
        Value::Sequence(items) => {
            let events = items
                .iter()
                .map(Value::as_str)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    CINormError::TriggerDecode("event list must contain only event names".to_string())
                })?;
            Ok(generate_triggers_from_events(events))
        }
        Value::Mapping(mapping) => {
            let on = decode_on(mapping)?;
            Ok(generate_triggers_from_on(on))
        }
        Value::Tagged(tagged) => Err(CINormError::InvalidYamlTag(tagged.tag.to_string())),
        Value::Bool(_) | Value::Number(_) => Err(CINormError::TriggerDecode(format!(
            "unexpected trigger declaration: {}",
            describe(on)
        ))),
    }
}

fn generate_triggers_from_events<'a>(events: impl IntoIterator<Item = &'a str>) -> Vec<Trigger> {
    events
        .into_iter()
        .map(|event| Trigger::new(github_event_to_model_event(event)))
        .collect()
}

/// Decodes an event map into its explicit slots. Keys without a slot are
/// kept, in document order, for bare triggers.
fn decode_on(mapping: &Mapping) -> Result<On> {
    let mut on = On::default();

    for (key, value) in mapping {
        let event = key.as_str().ok_or_else(|| {
            CINormError::TriggerDecode(format!("event name must be a string, found {}", describe(key)))
        })?;
        if let Value::Tagged(tagged) = value {
            return Err(CINormError::InvalidYamlTag(tagged.tag.to_string()));
        }

        match event {
            PUSH_EVENT => on.push = Some(decode_event(event, value)?),
            PULL_REQUEST_EVENT => on.pull_request = Some(decode_event(event, value)?),
            PULL_REQUEST_TARGET_EVENT => on.pull_request_target = Some(decode_event(event, value)?),
            WORKFLOW_DISPATCH_EVENT => on.workflow_dispatch = Some(decode_event(event, value)?),
            WORKFLOW_CALL_EVENT => on.workflow_call = Some(decode_event(event, value)?),
            SCHEDULE_EVENT => on.schedule = Some(decode_event(event, value)?),
            WORKFLOW_RUN_EVENT => on.workflow_run = Some(decode_event(event, value)?),
            _ => on.events.push((event.to_string(), value.clone())),
        }
    }

    Ok(on)
}

/// Decodes one event's configuration. A bare key (`push:`) is present with
/// an empty configuration.
fn decode_event<T: DeserializeOwned + Default>(event: &str, value: &Value) -> Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(value.clone())
        .map_err(|err| CINormError::TriggerDecode(format!("{event}: {err}")))
}

fn generate_triggers_from_on(on: On) -> Vec<Trigger> {
    let mut triggers: Vec<Trigger> = on
        .events
        .iter()
        .map(|(event, config)| parse_bare_event(event, config))
        .collect();

    if let Some(push) = &on.push {
        triggers.push(parse_git_event(push, EventType::push()));
    }
    if let Some(pull_request) = &on.pull_request {
        triggers.push(parse_git_event(pull_request, EventType::pull_request()));
    }
    if let Some(pull_request_target) = &on.pull_request_target {
        triggers.push(parse_git_event(
            pull_request_target,
            EventType::new(PULL_REQUEST_TARGET_EVENT),
        ));
    }
    if let Some(workflow_dispatch) = &on.workflow_dispatch {
        triggers.push(parse_workflow_dispatch(workflow_dispatch));
    }
    if let Some(workflow_call) = &on.workflow_call {
        triggers.push(parse_workflow_call(workflow_call));
    }
    if let Some(schedule) = &on.schedule {
        triggers.push(parse_schedule(schedule));
    }
    if let Some(workflow_run) = &on.workflow_run {
        triggers.push(parse_workflow_run(workflow_run));
    }

    debug!("Parsed {} workflow triggers", triggers.len());
    triggers
}

fn parse_bare_event(event: &str, config: &Value) -> Trigger {
    let mut trigger = Trigger::new(github_event_to_model_event(event));
    if let Some(types) = config.get("types") {
        trigger.filters.insert("types".to_string(), types.clone());
    }
    trigger
}

fn parse_git_event(git_event: &GitEvent, event: EventType) -> Trigger {
    let mut trigger = Trigger::new(event);
    trigger.branches = Some(Filter {
        allow_list: git_event.branches.clone().unwrap_or_default(),
        deny_list: git_event.branches_ignore.clone().unwrap_or_default(),
    });
    trigger.paths = Some(Filter {
        allow_list: git_event.paths.clone().unwrap_or_default(),
        deny_list: git_event.paths_ignore.clone().unwrap_or_default(),
    });

    let extra_filters = [
        ("tags", &git_event.tags),
        ("tags-ignore", &git_event.tags_ignore),
        ("types", &git_event.types),
    ];
    for (name, patterns) in extra_filters {
        if let Some(patterns) = patterns {
            trigger
                .filters
                .insert(name.to_string(), Value::from(patterns.clone()));
        }
    }

    trigger
}

fn parse_workflow_dispatch(workflow_dispatch: &WorkflowDispatch) -> Trigger {
    let mut trigger = Trigger::new(EventType::manual());
    trigger.parameters = parse_inputs(workflow_dispatch.inputs.as_ref());
    trigger
}

fn parse_workflow_call(workflow_call: &WorkflowCall) -> Trigger {
    let mut trigger = Trigger::new(EventType::pipeline_trigger());
    trigger.parameters = parse_inputs(workflow_call.inputs.as_ref());
    trigger
}

fn parse_inputs(inputs: Option<&Inputs>) -> Vec<Parameter> {
    inputs
        .map(|inputs| {
            inputs
                .iter()
                .map(|(name, input)| Parameter {
                    name: Some(name.clone()),
                    description: input.description.clone(),
                    default: input.default.clone(),
                    value: None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn parse_schedule(schedule: &[Schedule]) -> Trigger {
    let mut trigger = Trigger::new(EventType::scheduled());
    trigger.schedules = Some(schedule.iter().map(|s| s.cron.clone()).collect());
    trigger
}

fn parse_workflow_run(workflow_run: &WorkflowRun) -> Trigger {
    let mut trigger = Trigger::new(EventType::pipeline_run());
    trigger.pipelines = workflow_run.workflows.clone().unwrap_or_default();
    trigger.branches = Some(Filter {
        allow_list: workflow_run.branches.clone().unwrap_or_default(),
        deny_list: workflow_run.branches_ignore.clone().unwrap_or_default(),
    });
    if let Some(types) = &workflow_run.types {
        trigger
            .filters
            .insert("types".to_string(), Value::from(types.clone()));
    }
    trigger
}
