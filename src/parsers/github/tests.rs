use super::*;
use crate::error::CINormError;
use crate::models::{Condition, EventType, Filter, PermissionLevel, StepType, Trigger};

const CI_WORKFLOW: &str = r#"
name: CI

on:
  push:
    branches: [main]
    paths-ignore: ["docs/**"]
  pull_request:
  workflow_dispatch:
    inputs:
      debug:
        description: Enable debug logging
        default: false

permissions:
  contents: read

jobs:
  build:
    name: Build
    runs-on: ubuntu-latest
    timeout-minutes: 20
    permissions:
      contents: read
      packages: write
    steps:
      - uses: actions/checkout@v4
      - run: cargo build --locked

  test:
    runs-on: ${{ matrix.os }}
    needs: build
    if: success()
    steps:
      - run: cargo test

  deploy:
    needs: [build, test]
    if: github.ref == 'refs/heads/main'
    concurrency: production
    uses: ./.github/workflows/deploy.yml
    with:
      environment: production
"#;

fn job<'a>(pipeline: &'a crate::models::Pipeline, id: &str) -> &'a crate::models::Job {
    pipeline
        .jobs
        .iter()
        .find(|j| j.id.as_deref() == Some(id))
        .unwrap_or_else(|| panic!("job {id} not found"))
}

#[test]
fn test_parse_complete_workflow() {
    let pipeline = parse(CI_WORKFLOW.as_bytes()).unwrap();

    assert_eq!(pipeline.triggers.len(), 3);
    assert_eq!(pipeline.jobs.len(), 3);

    let push = &pipeline.triggers[0];
    assert_eq!(push.event, EventType::push());
    assert_eq!(
        push.paths,
        Some(Filter {
            allow_list: vec![],
            deny_list: vec!["docs/**".to_string()],
        })
    );
    assert_eq!(pipeline.triggers[1].event, EventType::pull_request());
    assert_eq!(pipeline.triggers[2].event, EventType::manual());
    assert_eq!(pipeline.triggers[2].parameters.len(), 1);

    let build = job(&pipeline, "build");
    assert_eq!(build.name.as_deref(), Some("Build"));
    assert_eq!(build.timeout_ms, Some(1_200_000));
    assert!(build.conditions.is_none());
    assert!(build.dependencies.is_none());
    let permissions = build.token_permissions.as_ref().unwrap();
    assert_eq!(permissions["packages"].level, PermissionLevel::Write);
    assert!(build.metadata.build);

    let test = job(&pipeline, "test");
    assert_eq!(test.name.as_deref(), Some("test"));
    assert_eq!(test.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
    assert_eq!(test.conditions, Some(vec![Condition::from("success()")]));
    assert_eq!(test.dependencies, Some(vec!["build".to_string()]));
    assert!(test.token_permissions.is_none());

    let deploy = job(&pipeline, "deploy");
    assert_eq!(deploy.concurrency_group.as_deref(), Some("production"));
    assert_eq!(deploy.dependencies.as_ref().map(Vec::len), Some(2));
    let steps = deploy.steps.as_ref().unwrap();
    assert_eq!(steps[0].step_type, StepType::Task);
    assert!(deploy.runner.is_none());
}

#[test]
fn test_workflow_without_triggers() {
    let pipeline = parse(b"jobs:\n  build:\n    runs-on: ubuntu-latest\n").unwrap();
    assert!(pipeline.triggers.is_empty());
    assert_eq!(pipeline.jobs.len(), 1);
}

#[test]
fn test_event_list_scenario() {
    let pipeline = parse(br#"on: ["push", "fork"]"#).unwrap();
    assert_eq!(
        pipeline.triggers,
        vec![
            Trigger::new(EventType::push()),
            Trigger::new(EventType::fork())
        ]
    );
    assert!(pipeline.jobs.is_empty());
}

#[test]
fn test_push_branches_scenario() {
    let pipeline = parse(br#"on: {push: {branches: ["main"]}}"#).unwrap();
    let push = &pipeline.triggers[0];
    assert_eq!(push.event, EventType::push());
    assert_eq!(
        push.branches,
        Some(Filter {
            allow_list: vec!["main".to_string()],
            deny_list: vec![],
        })
    );
    assert_eq!(push.paths, Some(Filter::default()));
}

#[test]
fn test_trigger_failure_aborts_parse() {
    let err = parse(b"on: 3\njobs:\n  build: {}\n").unwrap_err();
    assert!(matches!(err, CINormError::TriggerDecode(_)));
}

#[test]
fn test_job_failure_aborts_parse() {
    let err = parse(
        b"on: push\njobs:\n  build:\n    permissions:\n      contents: maybe\n",
    )
    .unwrap_err();
    assert!(matches!(err, CINormError::InvalidPermission { .. }));
    assert!(err.to_string().contains("maybe"));
}

#[test]
fn test_invalid_document() {
    let err = parse(b"jobs: [build, test]\n").unwrap_err();
    assert!(matches!(err, CINormError::InvalidYaml(_)));
    assert!(err.to_string().starts_with("invalid yaml"));
}

#[test]
fn test_matrix_expression_fields_parse() {
    let pipeline = parse(
        br#"
on: push
jobs:
  test:
    runs-on: ubuntu-latest
    continue-on-error: ${{ matrix.experimental }}
    timeout-minutes: ${{ matrix.timeout }}
    steps:
      - run: cargo test
        continue-on-error: ${{ matrix.experimental }}
"#,
    )
    .unwrap();

    let test = job(&pipeline, "test");
    assert_eq!(test.continue_on_error, None);
    assert_eq!(test.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
    assert_eq!(test.steps.as_ref().unwrap()[0].continue_on_error, None);
}

#[test]
fn test_empty_and_comment_only_documents_agree() {
    for data in [&b""[..], b"\n", b"# nothing here\n"] {
        let pipeline = parse(data).unwrap();
        assert!(pipeline.triggers.is_empty());
        assert!(pipeline.jobs.is_empty());
    }
}

#[test]
fn test_permissions_shape_error_aborts_parse() {
    let err = parse(b"jobs:\n  build:\n    permissions: [contents]\n").unwrap_err();
    assert!(matches!(err, CINormError::InvalidPermission { .. }));
}
