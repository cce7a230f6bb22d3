use crate::models::{DockerMetadata, Runner};

use super::schema::{Container, RunsOn};

const SELF_HOSTED_LABEL: &str = "self-hosted";

/// Maps `runs-on` and `container` onto a canonical runner. Returns `None`
/// when the job declares neither.
pub fn parse_runner(runs_on: Option<&RunsOn>, container: Option<&Container>) -> Option<Runner> {
    if runs_on.is_none() && container.is_none() {
        return None;
    }

    let mut runner = Runner::default();
    match runs_on {
        Some(RunsOn::Label(label)) => runner.labels = vec![label.clone()],
        Some(RunsOn::Labels(labels)) => runner.labels = labels.clone(),
        Some(RunsOn::Group(group)) => {
            runner.group = group.group.clone();
            runner.labels = group.labels.as_ref().map(|l| l.to_vec()).unwrap_or_default();
        }
        None => {}
    }

    runner.self_hosted |= runner.labels.iter().any(|l| l == SELF_HOSTED_LABEL);
    runner.os = runner.labels.iter().find_map(|l| label_os(l)).map(str::to_string);
    runner.docker_metadata = container.map(parse_container);

    Some(runner)
}

fn label_os(label: &str) -> Option<&'static str> {
    let label = label.to_ascii_lowercase();
    if label.starts_with("ubuntu") || label == "linux" {
        Some("linux")
    } else if label.starts_with("windows") {
        Some("windows")
    } else if label.starts_with("macos") {
        Some("macos")
    } else {
        None
    }
}

fn parse_container(container: &Container) -> DockerMetadata {
    let image = match container {
        Container::Image(image) => image,
        Container::Config(config) => &config.image,
    };

    // The tag follows the last ':' unless that ':' belongs to a registry port
    match image.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => DockerMetadata {
            image: name.to_string(),
            label: Some(tag.to_string()),
        },
        _ => DockerMetadata {
            image: image.clone(),
            label: None,
        },
    }
}
