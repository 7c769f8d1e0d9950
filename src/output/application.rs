use comfy_table::Color;

use crate::core::Application;
use crate::output::format::{
    create_styled_table, header_cell, path_cell, plural, styled_cell, to_json,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ApplicationTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
}

pub(crate) fn print_application_table(
    applications: &[Application],
    options: ApplicationTableOptions,
) {
    let use_color = options.use_color;
    let mut table = create_styled_table();

    if options.compact {
        table.set_header(vec![
            header_cell("Tool", use_color),
            header_cell("Build", use_color),
        ]);
    } else {
        table.set_header(vec![
            header_cell("Tool", use_color),
            header_cell("Channel", use_color),
            header_cell("Build", use_color),
            header_cell("Launcher", use_color),
            header_cell("Icon", use_color),
        ]);
    }

    let id_color = if use_color { Some(Color::Green) } else { None };

    for app in applications {
        if options.compact {
            table.add_row(vec![
                styled_cell(&app.id, id_color, false),
                styled_cell(&app.build_number, None, false),
            ]);
        } else {
            table.add_row(vec![
                styled_cell(&app.id, id_color, false),
                styled_cell(&app.channel_id, None, false),
                styled_cell(&app.build_number, None, false),
                path_cell(&app.path),
                path_cell(&app.icon),
            ]);
        }
    }

    println!("\n  Installed Applications\n");
    println!("{table}");
    println!("\n  {}\n", plural(applications.len(), "application"));
}

pub(crate) fn output_application_json(
    applications: &[Application],
) -> Result<String, serde_json::Error> {
    to_json(applications)
}
