use std::fmt::Write;

use cinorm::models::{Job, Runner, Trigger};
use comfy_table::{Cell, Color as TableColor};

use super::styling::{count, dim, tag, title};
use super::tables::{
    create_cyan_header, create_table, filter_cell, metadata_cell, permissions_cell,
};
use super::ParsedFile;

/// Renders a human-readable summary of normalized pipelines.
///
/// Each file gets an overview line followed by a triggers table and a
/// jobs table. Jobs are listed in document order.
pub fn render_summary(files: &[ParsedFile]) -> String {
    let mut output = String::new();

    for parsed in files {
        add_section_header(&mut output, "📄", &parsed.file);

        let pipeline = &parsed.pipeline;
        let _ = writeln!(
            output,
            "  {} {}\n  {} {}\n",
            dim("Triggers:"),
            count(pipeline.triggers.len()),
            dim("Jobs:"),
            count(pipeline.jobs.len()),
        );

        if pipeline.triggers.is_empty() {
            let _ = writeln!(output, "{}\n", dim("  No triggers declared."));
        } else {
            let _ = writeln!(output, "{}\n", render_triggers(&pipeline.triggers));
        }

        if pipeline.jobs.is_empty() {
            let _ = writeln!(output, "{}\n", dim("  No jobs declared."));
        } else {
            let _ = writeln!(output, "{}\n", render_jobs(&pipeline.jobs));
        }
    }

    output.trim_end().to_string()
}

fn add_section_header(output: &mut String, emoji: &str, heading: &str) {
    let _ = writeln!(output, "{emoji} {}", title(heading));
}

fn render_triggers(triggers: &[Trigger]) -> comfy_table::Table {
    let mut table = create_table();
    table.set_header(create_cyan_header(&["Event", "Branches", "Paths", "Details"]));

    for trigger in triggers {
        table.add_row(vec![
            Cell::new(trigger.event.as_str()).fg(TableColor::Cyan),
            filter_cell(trigger.branches.as_ref()),
            filter_cell(trigger.paths.as_ref()),
            Cell::new(trigger_details(trigger)),
        ]);
    }

    table
}

fn trigger_details(trigger: &Trigger) -> String {
    let mut details = Vec::new();
    if !trigger.parameters.is_empty() {
        let names: Vec<&str> = trigger
            .parameters
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        details.push(format!("inputs: {}", names.join(", ")));
    }
    if let Some(schedules) = &trigger.schedules {
        details.extend(schedules.iter().map(|cron| format!("cron: {cron}")));
    }
    if !trigger.pipelines.is_empty() {
        details.push(format!("after: {}", trigger.pipelines.join(", ")));
    }
    if !trigger.filters.is_empty() {
        let keys: Vec<&str> = trigger.filters.keys().map(String::as_str).collect();
        details.push(format!("filters: {}", keys.join(", ")));
    }

    if details.is_empty() {
        "-".to_string()
    } else {
        details.join("\n")
    }
}

fn render_jobs(jobs: &[Job]) -> comfy_table::Table {
    let mut table = create_table();
    table.set_header(create_cyan_header(&[
        "Job", "Runner", "Needs", "Steps", "Timeout", "Permissions", "Kind",
    ]));

    for job in jobs {
        let name = match (job.id.as_deref(), job.name.as_deref()) {
            (Some(id), Some(name)) if id != name => format!("{name}\n{}", dim(id)),
            (_, Some(name)) => name.to_string(),
            (Some(id), None) => id.to_string(),
            (None, None) => "-".to_string(),
        };

        let needs = job
            .dependencies
            .as_ref()
            .filter(|deps| !deps.is_empty())
            .map_or_else(|| "-".to_string(), |deps| deps.join("\n"));

        table.add_row(vec![
            Cell::new(name),
            Cell::new(job.runner.as_ref().map_or_else(|| "-".to_string(), describe_runner)),
            Cell::new(needs),
            Cell::new(job.steps.as_ref().map_or(0, Vec::len)),
            Cell::new(format_timeout(job.timeout_ms)),
            permissions_cell(job.token_permissions.as_ref()),
            metadata_cell(job.metadata),
        ]);
    }

    table
}

fn describe_runner(runner: &Runner) -> String {
    let mut lines = Vec::new();
    if let Some(group) = &runner.group {
        lines.push(format!("group: {group}"));
    }
    if !runner.labels.is_empty() {
        lines.push(runner.labels.join(", "));
    }
    if let Some(docker) = &runner.docker_metadata {
        match &docker.label {
            Some(version) => lines.push(format!("image: {}:{version}", docker.image)),
            None => lines.push(format!("image: {}", docker.image)),
        }
    }
    if runner.self_hosted {
        lines.push(tag("self-hosted").to_string());
    }

    if lines.is_empty() {
        "-".to_string()
    } else {
        lines.join("\n")
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_timeout(timeout_ms: Option<u64>) -> String {
    timeout_ms.map_or_else(
        || "-".to_string(),
        |ms| format!("{:.0}min", ms as f64 / 60_000.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinorm::{parsers, Platform};

    fn parsed(yaml: &str) -> ParsedFile {
        ParsedFile {
            file: ".github/workflows/ci.yml".to_string(),
            pipeline: parsers::parse(Platform::GitHub, yaml.as_bytes()).unwrap(),
        }
    }

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    #[test]
    fn test_render_summary_lists_triggers_and_jobs() {
        let output = plain(&render_summary(&[parsed(
            r#"
on:
  push:
    branches: [main]
    paths-ignore: ["docs/**"]
  schedule:
    - cron: "0 3 * * *"
jobs:
  build:
    name: Build
    runs-on: ubuntu-latest
    timeout-minutes: 15
    permissions:
      contents: read
      packages: write
    steps:
      - run: cargo build
  deploy:
    needs: build
    runs-on: [self-hosted, linux]
    steps:
      - run: ./deploy.sh
"#,
        )]));

        assert!(output.contains(".github/workflows/ci.yml"));
        assert!(output.contains("push"));
        assert!(output.contains("main"));
        assert!(output.contains("!docs/**"));
        assert!(output.contains("cron: 0 3 * * *"));
        assert!(output.contains("Build"));
        assert!(output.contains("15min"));
        assert!(output.contains("360min"));
        assert!(output.contains("write: packages"));
        assert!(output.contains("self-hosted"));
        assert!(output.contains("deploy"));
    }

    #[test]
    fn test_render_summary_empty_pipeline() {
        let output = plain(&render_summary(&[parsed("name: empty\n")]));

        assert!(output.contains("No triggers declared."));
        assert!(output.contains("No jobs declared."));
    }

    #[test]
    fn test_empty_sections_share_styling() {
        let output = render_summary(&[parsed("name: empty\n")]);

        assert!(output.contains(&dim("  No triggers declared.").to_string()));
        assert!(output.contains(&dim("  No jobs declared.").to_string()));
    }

    #[test]
    fn test_render_summary_multiple_files() {
        let mut second = parsed("on: pull_request\n");
        second.file = "release.yml".to_string();
        let output = plain(&render_summary(&[parsed("on: push\n"), second]));

        assert!(output.contains("ci.yml"));
        assert!(output.contains("release.yml"));
        assert!(output.contains("pull_request"));
    }

    #[test]
    fn test_format_timeout() {
        assert_eq!(format_timeout(Some(1_200_000)), "20min");
        assert_eq!(format_timeout(None), "-");
    }

    #[test]
    fn test_trigger_details_without_extras() {
        let trigger = Trigger::new(cinorm::models::EventType::push());
        assert_eq!(trigger_details(&trigger), "-");
    }
}
