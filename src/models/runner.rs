use serde::Serialize;

/// Container image a job runs inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockerMetadata {
    pub image: String,
    pub label: Option<String>,
}

/// Where a job executes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Runner {
    /// Labels a runner must match
    pub labels: Vec<String>,
    /// Operating system inferred from hosted-runner labels
    pub os: Option<String>,
    /// Whether the job targets self-hosted infrastructure
    pub self_hosted: bool,
    /// Runner group, when the job selects one
    pub group: Option<String>,
    pub docker_metadata: Option<DockerMetadata>,
}
