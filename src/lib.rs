//! Normalize vendor CI/CD pipeline definitions into a vendor-neutral model.
//!
//! ```no_run
//! use cinorm::{parsers, Platform};
//!
//! let yaml = b"on: [push]\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - run: make\n";
//! let pipeline = parsers::parse(Platform::GitHub, yaml)?;
//! assert_eq!(pipeline.jobs.len(), 1);
//! # Ok::<(), cinorm::CINormError>(())
//! ```

pub mod error;
pub mod models;
pub mod parsers;
pub mod platform;

pub use error::{CINormError, Result};
pub use models::Pipeline;
pub use platform::Platform;
