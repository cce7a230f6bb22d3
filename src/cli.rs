use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use cinorm::{parsers, CINormError, Platform};

use crate::config::{Config, OutputFormat};
use crate::output::{self, ParsedFile};

#[derive(Parser)]
#[command(name = "cinorm")]
#[command(author, version, about = "CI/CD Pipeline Normalizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    #[arg(short, long, global = true, env = "CINORM_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize pipeline files into the vendor-neutral model
    Parse {
        files: Vec<PathBuf>,

        #[arg(short = 'P', long, env = "CINORM_PLATFORM")]
        platform: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List supported platforms
    Platforms,
}

impl Cli {
    fn execute_parse(
        &self,
        config: &Config,
        files: &[PathBuf],
        platform: Option<&str>,
        format: Option<OutputFormat>,
    ) -> Result<()> {
        if files.is_empty() {
            return Err(CINormError::InvalidArgumentsCount(files.len()).into());
        }

        let platform: Platform = platform.unwrap_or(config.platform.as_str()).parse()?;
        info!("Normalizing {} {} pipeline file(s)", files.len(), platform);

        let parsed = files
            .iter()
            .map(|path| {
                let pipeline = parsers::parse_file(platform, path)
                    .with_context(|| format!("Failed to parse pipeline: {}", path.display()))?;
                Ok(ParsedFile {
                    file: path.display().to_string(),
                    pipeline,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rendered = match format.unwrap_or(config.output.format) {
            OutputFormat::Json if self.pretty || config.output.pretty => {
                serde_json::to_string_pretty(&parsed)?
            }
            OutputFormat::Json => serde_json::to_string(&parsed)?,
            OutputFormat::Summary => output::render_summary(&parsed),
        };

        self.emit(&rendered)
    }

    fn emit(&self, rendered: &str) -> Result<()> {
        if let Some(output_path) = &self.output {
            std::fs::write(output_path, rendered).with_context(|| {
                format!("Failed to write output file: {}", output_path.display())
            })?;
            info!("Output written to: {}", output_path.display());
        } else {
            println!("{rendered}");
        }
        Ok(())
    }

    pub fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Parse {
                files,
                platform,
                format,
            } => self.execute_parse(&config, files, platform.as_deref(), *format),
            Commands::Platforms => self.emit(&Platform::supported().join("\n")),
        }
    }
}
