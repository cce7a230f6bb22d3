use std::fmt::Display;

use console::{style, StyledObject};

/// Counts in the per-file overview.
pub fn count(value: impl Display) -> StyledObject<String> {
    style(value.to_string()).bright().yellow()
}

/// Labels on the self-hosted marker and similar inline tags.
pub fn tag(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).cyan()
}

pub fn dim(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).dim()
}

/// Section titles: the workflow path, bright and underlined.
pub fn title(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).bright().underlined()
}

pub fn banner(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).magenta().bold()
}
