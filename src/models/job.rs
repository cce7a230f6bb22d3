use indexmap::IndexMap;
use serde::Serialize;

use super::{EnvironmentVariables, Parameter, Runner, Step};

/// Gating expression evaluated by the vendor before running a job or step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Condition(pub String);

impl From<&str> for Condition {
    fn from(expression: &str) -> Self {
        Self(expression.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    None,
    Read,
    Write,
}

impl PermissionLevel {
    /// Parses a vendor level token. Only the closed set `none`, `read` and
    /// `write` is accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Self::None),
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            _ => None,
        }
    }
}

/// Access granted to the job's credentials for a single scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    pub scope: String,
    pub level: PermissionLevel,
}

impl Permission {
    pub fn can_read(&self) -> bool {
        matches!(self.level, PermissionLevel::Read | PermissionLevel::Write)
    }

    pub fn can_write(&self) -> bool {
        self.level == PermissionLevel::Write
    }
}

pub type TokenPermissions = IndexMap<String, Permission>;

/// Coarse classification of what a job does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metadata {
    pub build: bool,
    pub test: bool,
    pub deploy: bool,
}

/// A unit of work within a pipeline.
///
/// Every optional field distinguishes "vendor omitted" (`None`) from
/// "vendor set it to an empty value" (`Some` of an empty collection).
/// `timeout_ms` is the one field the normalizer defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: Option<String>,
    pub name: Option<String>,
    pub steps: Option<Vec<Step>>,
    pub pre_steps: Option<Vec<Step>>,
    pub post_steps: Option<Vec<Step>>,
    pub continue_on_error: Option<bool>,
    pub environment_variables: Option<EnvironmentVariables>,
    pub runner: Option<Runner>,
    pub conditions: Option<Vec<Condition>>,
    pub concurrency_group: Option<String>,
    pub inputs: Option<Vec<Parameter>>,
    pub timeout_ms: Option<u64>,
    pub tags: Option<Vec<String>>,
    pub token_permissions: Option<TokenPermissions>,
    pub dependencies: Option<Vec<String>>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_level_tokens() {
        assert_eq!(PermissionLevel::from_token("none"), Some(PermissionLevel::None));
        assert_eq!(PermissionLevel::from_token("read"), Some(PermissionLevel::Read));
        assert_eq!(PermissionLevel::from_token("write"), Some(PermissionLevel::Write));
        assert_eq!(PermissionLevel::from_token("admin"), None);
        assert_eq!(PermissionLevel::from_token("READ"), None);
    }

    #[test]
    fn test_write_implies_read() {
        let permission = Permission {
            scope: "contents".to_string(),
            level: PermissionLevel::Write,
        };
        assert!(permission.can_read());
        assert!(permission.can_write());

        let none = Permission {
            scope: "contents".to_string(),
            level: PermissionLevel::None,
        };
        assert!(!none.can_read());
        assert!(!none.can_write());
    }
}
