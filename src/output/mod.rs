mod styling;
mod summary;
mod tables;

use serde::Serialize;

use cinorm::Pipeline;

use styling::{banner, dim};
pub use summary::render_summary;

/// A normalized pipeline together with the file it was read from.
#[derive(Debug, Serialize)]
pub struct ParsedFile {
    pub file: String,
    pub pipeline: Pipeline,
}

/// Prints the `cinorm` banner to stderr.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        banner("🧭 cinorm"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("CI/CD Pipeline Normalizer")
    );
}
