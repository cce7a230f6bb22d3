//! GitHub Actions workflow schema.
//!
//! Mirrors the vendor's workflow syntax closely enough that field presence
//! survives loading: every optional key is an `Option`. The `on` block stays
//! a raw [`serde_yaml::Value`] because its shape is only known after probing.
//! See: <https://docs.github.com/en/actions/using-workflows/workflow-syntax-for-github-actions>

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::Result;

/// A workflow file as written by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Workflow {
    pub name: Option<String>,

    /// Trigger declaration: event name, list of names, or event map
    pub on: Option<Value>,

    /// Job definitions (order preserved via `IndexMap`)
    #[serde(default)]
    pub jobs: IndexMap<String, Job>,
}

impl Workflow {
    /// Loads a workflow from raw YAML bytes.
    ///
    /// # Errors
    ///
    /// An empty document loads as an empty workflow, the same as a
    /// comment-only one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CINormError::InvalidYaml`] when the document does not
    /// match the workflow schema.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_slice(data)?)
    }
}

/// A boolean field that may also hold a `${{ }}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BoolOrExpr {
    Bool(bool),
    Expr(String),
}

impl BoolOrExpr {
    /// The literal value; expressions are only known at run time.
    pub fn literal(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Expr(_) => None,
        }
    }
}

/// A numeric field that may also hold a `${{ }}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrExpr {
    Number(u64),
    Expr(String),
}

impl NumberOrExpr {
    pub fn literal(&self) -> Option<u64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Expr(_) => None,
        }
    }
}

/// A value that may be written as a single item or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item.clone()],
            Self::Many(items) => items.clone(),
        }
    }
}

/// Runner specification for where a job runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunsOn {
    /// Single runner label (e.g., "ubuntu-latest")
    Label(String),
    /// Multiple runner labels (job runs on runner matching all labels)
    Labels(Vec<String>),
    /// Runner group with optional labels
    Group(RunnerGroup),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerGroup {
    pub group: Option<String>,
    pub labels: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Concurrency {
    Group(String),
    Config(ConcurrencyConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencyConfig {
    pub group: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Container {
    Image(String),
    Config(ContainerConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerConfig {
    pub image: String,
}

/// A job in a GitHub Actions workflow.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Job {
    pub id: Option<String>,
    pub name: Option<String>,
    pub needs: Option<OneOrMany<String>>,
    pub runs_on: Option<RunsOn>,
    /// `read-all`/`write-all` or a scope map; probed by the permission mapper
    pub permissions: Option<Value>,
    pub concurrency: Option<Concurrency>,
    #[serde(rename = "if")]
    pub if_condition: Option<String>,
    pub env: Option<IndexMap<String, Value>>,
    pub timeout_minutes: Option<NumberOrExpr>,
    pub continue_on_error: Option<BoolOrExpr>,
    pub container: Option<Container>,
    pub steps: Option<Vec<Step>>,

    /// Reusable workflow called by this job
    pub uses: Option<String>,
    /// Inputs passed to the reusable workflow
    pub with: Option<IndexMap<String, Value>>,
}

/// A step in a job: either `uses` an action or `run`s a command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Step {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "if")]
    pub if_condition: Option<String>,
    pub uses: Option<String>,
    pub run: Option<String>,
    pub shell: Option<String>,
    pub with: Option<IndexMap<String, Value>>,
    pub env: Option<IndexMap<String, Value>>,
    pub continue_on_error: Option<BoolOrExpr>,
    pub timeout_minutes: Option<NumberOrExpr>,
    pub working_directory: Option<String>,
}

/// Branch/path/tag filters shared by `push`, `pull_request` and
/// `pull_request_target`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitEvent {
    pub branches: Option<Vec<String>>,
    pub branches_ignore: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
    pub paths_ignore: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub tags_ignore: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
}

/// Input definition for `workflow_dispatch` and `workflow_call`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
    pub description: Option<String>,
    pub default: Option<Value>,
}

pub type Inputs = IndexMap<String, Input>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowDispatch {
    pub inputs: Option<Inputs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowCall {
    pub inputs: Option<Inputs>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub cron: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkflowRun {
    pub workflows: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub branches: Option<Vec<String>>,
    pub branches_ignore: Option<Vec<String>>,
}

/// Structured form of the `on` block: one slot per event kind with a
/// dedicated configuration, plus every other key in document order.
#[derive(Debug, Clone, Default)]
pub struct On {
    pub push: Option<GitEvent>,
    pub pull_request: Option<GitEvent>,
    pub pull_request_target: Option<GitEvent>,
    pub workflow_dispatch: Option<WorkflowDispatch>,
    pub workflow_call: Option<WorkflowCall>,
    pub schedule: Option<Vec<Schedule>>,
    pub workflow_run: Option<WorkflowRun>,
    pub events: Vec<(String, Value)>,
}

/// Short description of a value's shape for error messages.
pub(super) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CINormError;

    #[test]
    fn test_load_minimal_workflow() {
        let workflow = Workflow::from_slice(
            br#"
name: CI
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: cargo test
"#,
        )
        .unwrap();

        assert_eq!(workflow.name.as_deref(), Some("CI"));
        assert_eq!(workflow.on, Some(Value::String("push".to_string())));
        let build = &workflow.jobs["build"];
        assert!(matches!(build.runs_on, Some(RunsOn::Label(ref l)) if l == "ubuntu-latest"));
        assert_eq!(build.steps.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_jobs_keep_document_order() {
        let workflow = Workflow::from_slice(
            b"jobs:\n  zeta: {}\n  alpha: {}\n  mid: {}\n",
        )
        .unwrap();
        let keys: Vec<&str> = workflow.jobs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_runs_on_shapes() {
        let labels: RunsOn = serde_yaml::from_str("[self-hosted, linux]").unwrap();
        assert!(matches!(labels, RunsOn::Labels(ref l) if l.len() == 2));

        let group: RunsOn = serde_yaml::from_str("group: large\nlabels: gpu").unwrap();
        match group {
            RunsOn::Group(group) => {
                assert_eq!(group.group.as_deref(), Some("large"));
                assert_eq!(group.labels.unwrap().to_vec(), vec!["gpu".to_string()]);
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_needs_accepts_string_or_list() {
        let one: OneOrMany<String> = serde_yaml::from_str("build").unwrap();
        assert_eq!(one.to_vec(), vec!["build".to_string()]);

        let many: OneOrMany<String> = serde_yaml::from_str("[build, lint]").unwrap();
        assert_eq!(many.to_vec(), vec!["build".to_string(), "lint".to_string()]);
    }

    #[test]
    fn test_empty_and_comment_only_documents_load_empty() {
        for data in [&b""[..], b"  \n", b"# nothing here\n"] {
            let workflow = Workflow::from_slice(data).unwrap();
            assert!(workflow.name.is_none());
            assert!(workflow.on.is_none());
            assert!(workflow.jobs.is_empty());
        }
    }

    #[test]
    fn test_schema_mismatch_is_invalid_yaml() {
        let err = Workflow::from_slice(b"jobs:\n  build:\n    steps: cargo test\n").unwrap_err();
        assert!(matches!(err, CINormError::InvalidYaml(_)));
    }

    #[test]
    fn test_expression_fields_load() {
        let workflow = Workflow::from_slice(
            br#"
jobs:
  test:
    continue-on-error: ${{ matrix.experimental }}
    timeout-minutes: ${{ inputs.timeout }}
  build:
    continue-on-error: false
    timeout-minutes: 20
"#,
        )
        .unwrap();

        let test = &workflow.jobs["test"];
        assert_eq!(
            test.continue_on_error,
            Some(BoolOrExpr::Expr("${{ matrix.experimental }}".to_string()))
        );
        assert_eq!(test.timeout_minutes.as_ref().and_then(NumberOrExpr::literal), None);

        let build = &workflow.jobs["build"];
        assert_eq!(build.continue_on_error.as_ref().and_then(BoolOrExpr::literal), Some(false));
        assert_eq!(build.timeout_minutes, Some(NumberOrExpr::Number(20)));
    }

    #[test]
    fn test_keys_without_canonical_counterpart_are_ignored() {
        let workflow = Workflow::from_slice(
            br#"
jobs:
  build:
    concurrency:
      group: ci
      cancel-in-progress: true
    container:
      image: node:20
      options: --cpus 2
"#,
        )
        .unwrap();

        let build = &workflow.jobs["build"];
        assert!(matches!(
            build.concurrency,
            Some(Concurrency::Config(ref c)) if c.group.as_deref() == Some("ci")
        ));
        assert!(matches!(build.container, Some(Container::Config(ref c)) if c.image == "node:20"));

        let call: WorkflowCall = serde_yaml::from_str(
            "inputs:\n  env:\n    type: string\n    required: true\noutputs: {}\nsecrets: {}\n",
        )
        .unwrap();
        assert!(call.inputs.unwrap().contains_key("env"));
    }
}
