use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

use cinorm::models::{Filter, Metadata, TokenPermissions};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn create_cyan_header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

/// Renders allow entries as-is and deny entries prefixed with `!`.
pub fn filter_cell(filter: Option<&Filter>) -> Cell {
    let Some(filter) = filter else {
        return Cell::new("-").fg(TableColor::DarkGrey);
    };
    if filter.allow_list.is_empty() && filter.deny_list.is_empty() {
        return Cell::new("any").fg(TableColor::DarkGrey);
    }

    let lines: Vec<String> = filter
        .allow_list
        .iter()
        .cloned()
        .chain(filter.deny_list.iter().map(|entry| format!("!{entry}")))
        .collect();
    Cell::new(lines.join("\n"))
}

/// Write grants stand out in yellow; read-only sets stay green.
pub fn permissions_cell(permissions: Option<&TokenPermissions>) -> Cell {
    let Some(permissions) = permissions else {
        return Cell::new("inherited").fg(TableColor::DarkGrey);
    };

    let writes: Vec<&str> = permissions
        .values()
        .filter(|p| p.can_write())
        .map(|p| p.scope.as_str())
        .collect();
    if writes.is_empty() {
        let reads = permissions.values().filter(|p| p.can_read()).count();
        Cell::new(format!("read: {reads}")).fg(TableColor::Green)
    } else {
        Cell::new(format!("write: {}", writes.join(", "))).fg(TableColor::Yellow)
    }
}

pub fn metadata_cell(metadata: Metadata) -> Cell {
    let kinds: Vec<&str> = [
        (metadata.build, "build"),
        (metadata.test, "test"),
        (metadata.deploy, "deploy"),
    ]
    .into_iter()
    .filter_map(|(set, kind)| set.then_some(kind))
    .collect();

    if kinds.is_empty() {
        Cell::new("-").fg(TableColor::DarkGrey)
    } else if metadata.deploy {
        Cell::new(kinds.join(", ")).fg(TableColor::Magenta)
    } else {
        Cell::new(kinds.join(", ")).fg(TableColor::Green)
    }
}
