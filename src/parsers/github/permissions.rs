use serde_yaml::Value;

use crate::error::{CINormError, Result};
use crate::models::{Permission, PermissionLevel, TokenPermissions};

use super::schema::describe;

/// Scopes granted by the `read-all` and `write-all` shorthands.
const TOKEN_SCOPES: &[&str] = &[
    "actions",
    "attestations",
    "checks",
    "contents",
    "deployments",
    "discussions",
    "id-token",
    "issues",
    "packages",
    "pages",
    "pull-requests",
    "repository-projects",
    "security-events",
    "statuses",
];

/// Translates a job's `permissions` block into canonical token permissions.
///
/// The block is either a shorthand string or a scope map. Scope names are
/// open; levels must be one of `none`, `read` or `write`.
///
/// # Errors
///
/// Returns [`CINormError::InvalidPermission`] naming the scope and token of
/// the first entry whose level is not recognized. A block of any other shape
/// is reported against scope `*`. A tagged block is
/// [`CINormError::InvalidYamlTag`].
pub fn parse_token_permissions(permissions: &Value) -> Result<TokenPermissions> {
    match permissions {
        Value::String(shorthand) => match shorthand.as_str() {
            "read-all" => Ok(all_scopes(PermissionLevel::Read)),
            "write-all" => Ok(all_scopes(PermissionLevel::Write)),
            other => Err(CINormError::InvalidPermission {
                scope: "*".to_string(),
                level: other.to_string(),
            }),
        },
        Value::Mapping(scopes) => scopes
            .iter()
            .map(|(scope, level)| {
                let scope = scope.as_str().ok_or_else(|| CINormError::InvalidPermission {
                    scope: describe(scope),
                    level: token_text(level),
                })?;
                let level = parse_level(scope, level)?;
                Ok((
                    scope.to_string(),
                    Permission {
                        scope: scope.to_string(),
                        level,
                    },
                ))
            })
            .collect(),
        Value::Tagged(tagged) => Err(CINormError::InvalidYamlTag(tagged.tag.to_string())),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Sequence(_) => {
            Err(CINormError::InvalidPermission {
                scope: "*".to_string(),
                level: describe(permissions),
            })
        }
    }
}

fn parse_level(scope: &str, level: &Value) -> Result<PermissionLevel> {
    level
        .as_str()
        .and_then(PermissionLevel::from_token)
        .ok_or_else(|| CINormError::InvalidPermission {
            scope: scope.to_string(),
            level: token_text(level),
        })
}

fn all_scopes(level: PermissionLevel) -> TokenPermissions {
    TOKEN_SCOPES
        .iter()
        .map(|scope| {
            (
                (*scope).to_string(),
                Permission {
                    scope: (*scope).to_string(),
                    level,
                },
            )
        })
        .collect()
}

fn token_text(level: &Value) -> String {
    match level {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unprintable>".to_string()),
    }
}
