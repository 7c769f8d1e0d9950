use comfy_table::Color;
use std::path::PathBuf;

use crate::output::format::{create_styled_table, header_cell, path_cell, styled_cell, to_json};
use crate::toolbox::ToolboxReader;

/// Toolbox locations with their JSON keys
fn locations(reader: &ToolboxReader) -> [(&'static str, PathBuf); 3] {
    [
        ("toolbox_dir", reader.dir().to_path_buf()),
        ("state", reader.state_path()),
        ("projects", reader.projects_path()),
    ]
}

pub(crate) fn print_paths_table(reader: &ToolboxReader, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("File", use_color),
        header_cell("Path", use_color),
        header_cell("Exists", use_color),
    ]);

    for (label, path) in locations(reader) {
        let exists = path.exists();
        let color = match (use_color, exists) {
            (false, _) => None,
            (true, true) => Some(Color::Green),
            (true, false) => Some(Color::Red),
        };
        table.add_row(vec![
            styled_cell(label, None, true),
            path_cell(&path),
            styled_cell(if exists { "yes" } else { "no" }, color, false),
        ]);
    }

    println!("{table}");
}

pub(crate) fn output_paths_json(reader: &ToolboxReader) -> Result<String, serde_json::Error> {
    let mut obj = serde_json::Map::new();
    for (label, path) in locations(reader) {
        obj.insert(
            label.to_string(),
            serde_json::json!({
                "path": path,
                "exists": path.exists(),
            }),
        );
    }
    to_json(&obj)
}
