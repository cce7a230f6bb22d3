pub mod github;

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::models::Pipeline;
use crate::platform::Platform;

/// Parses a pipeline document written for `platform`.
///
/// # Errors
///
/// Returns the vendor parser's error when the document cannot be normalized.
pub fn parse(platform: Platform, data: &[u8]) -> Result<Pipeline> {
    debug!("Parsing {} bytes as a {platform} pipeline", data.len());
    match platform {
        Platform::GitHub => github::parse(data),
    }
}

/// Reads and parses a pipeline file.
///
/// # Errors
///
/// Returns [`crate::CINormError::Io`] when the file cannot be read, otherwise
/// the same errors as [`parse`].
pub fn parse_file(platform: Platform, path: &Path) -> Result<Pipeline> {
    let data = std::fs::read(path)?;
    parse(platform, &data)
}
