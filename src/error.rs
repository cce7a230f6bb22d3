use thiserror::Error;

#[derive(Error, Debug)]
pub enum CINormError {
    #[error("invalid platform: {platform}. Supported platforms: {supported:?}")]
    InvalidPlatform {
        platform: String,
        supported: Vec<String>,
    },

    #[error("invalid yaml: {0}")]
    InvalidYaml(String),

    #[error("invalid yaml tag: {0}")]
    InvalidYamlTag(String),

    #[error("invalid number of arguments: {0}. Expected minimum 1 argument")]
    InvalidArgumentsCount(usize),

    #[error("failed to parse workflow triggers: {0}")]
    TriggerDecode(String),

    #[error("invalid permission '{level}' for scope '{scope}'")]
    InvalidPermission { scope: String, level: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for CINormError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidYaml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CINormError>;
