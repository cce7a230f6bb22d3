use std::fmt;
use std::str::FromStr;

use crate::error::CINormError;

/// CI/CD vendors with a parser in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    GitHub,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[Platform::GitHub];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
        }
    }

    pub fn supported() -> Vec<String> {
        Self::ALL.iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CINormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" | "github-actions" | "gha" => Ok(Self::GitHub),
            _ => Err(CINormError::InvalidPlatform {
                platform: s.to_string(),
                supported: Self::supported(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_aliases() {
        assert_eq!("github".parse::<Platform>().unwrap(), Platform::GitHub);
        assert_eq!("GitHub".parse::<Platform>().unwrap(), Platform::GitHub);
        assert_eq!("github-actions".parse::<Platform>().unwrap(), Platform::GitHub);
    }

    #[test]
    fn test_unsupported_platform_lists_supported_set() {
        let err = "jenkins".parse::<Platform>().unwrap_err();
        match &err {
            CINormError::InvalidPlatform {
                platform,
                supported,
            } => {
                assert_eq!(platform, "jenkins");
                assert_eq!(supported, &vec!["github".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("jenkins"));
        assert!(err.to_string().contains("github"));
    }
}
