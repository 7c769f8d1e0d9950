use comfy_table::Color;

use crate::core::Project;
use crate::output::format::{NONE_MARKER, create_styled_table, header_cell, plural, styled_cell, to_json};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
}

fn application_label(project: &Project) -> String {
    project
        .application
        .as_ref()
        .map_or_else(|| NONE_MARKER.to_string(), |app| app.label())
}

pub(crate) fn print_project_table(projects: &[Project], options: ProjectTableOptions) {
    let use_color = options.use_color;
    let mut table = create_styled_table();

    if options.compact {
        table.set_header(vec![
            header_cell("Project", use_color),
            header_cell("Application", use_color),
        ]);
    } else {
        table.set_header(vec![
            header_cell("Project", use_color),
            header_cell("Path", use_color),
            header_cell("Application", use_color),
        ]);
    }

    let app_color = if use_color { Some(Color::Green) } else { None };
    let missing_color = if use_color { Some(Color::DarkGrey) } else { None };

    let mut unresolved = 0usize;
    for project in projects {
        let color = if project.application.is_some() {
            app_color
        } else {
            unresolved += 1;
            missing_color
        };
        let app_cell = styled_cell(&application_label(project), color, false);

        if options.compact {
            table.add_row(vec![styled_cell(&project.name, None, true), app_cell]);
        } else {
            table.add_row(vec![
                styled_cell(&project.name, None, true),
                styled_cell(&project.path, None, false),
                app_cell,
            ]);
        }
    }

    println!("\n  Toolbox Projects\n");
    println!("{table}");
    println!(
        "\n  {} ({} without an installed application)\n",
        plural(projects.len(), "project"),
        unresolved
    );
}

pub(crate) fn output_project_json(projects: &[Project]) -> Result<String, serde_json::Error> {
    to_json(projects)
}
