use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{
    ApplicationTableOptions, ProjectTableOptions, output_application_json, output_paths_json,
    output_project_json, print_application_table, print_paths_table, print_project_table,
};
use crate::toolbox::ToolboxReader;
use crate::utils::{debug_enabled, filter_json};

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, cli: &Cli) -> Result<(), AppError> {
    match cli.jq.as_deref() {
        Some(filter) => print!("{}", filter_json(json, filter, cli.jq_raw)?),
        None => println!("{json}"),
    }
    Ok(())
}

fn handle_apps(reader: &ToolboxReader, cli: &Cli) -> Result<(), AppError> {
    let applications = reader.applications()?;

    if cli.wants_json() {
        return print_json(&output_application_json(&applications)?, cli);
    }
    if applications.is_empty() {
        println!("No applications found.");
        return Ok(());
    }
    print_application_table(
        &applications,
        ApplicationTableOptions {
            use_color: cli.use_color(),
            compact: cli.compact,
        },
    );
    Ok(())
}

fn handle_projects(
    reader: &ToolboxReader,
    cli: &Cli,
    query: Option<&str>,
    installed_only: bool,
) -> Result<(), AppError> {
    let start = Instant::now();
    let applications = reader.applications()?;
    let mut projects = reader.projects(&applications)?;

    if let Some(query) = query {
        projects.retain(|p| p.matches_query(query));
    }
    if installed_only {
        projects.retain(|p| p.application.is_some());
    }
    if debug_enabled() {
        eprintln!(
            "Resolved {} projects against {} applications ({:.2}ms)",
            projects.len(),
            applications.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    if cli.wants_json() {
        return print_json(&output_project_json(&projects)?, cli);
    }
    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    print_project_table(
        &projects,
        ProjectTableOptions {
            use_color: cli.use_color(),
            compact: cli.compact,
        },
    );
    Ok(())
}

fn handle_paths(reader: &ToolboxReader, cli: &Cli) -> Result<(), AppError> {
    if cli.wants_json() {
        return print_json(&output_paths_json(reader)?, cli);
    }
    print_paths_table(reader, cli.use_color());
    Ok(())
}

/// Run the selected subcommand against the configured Toolbox directory
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let reader = ToolboxReader::locate(cli.toolbox_dir.clone())?
        .with_blacklist(&cli.blacklist)
        .with_icon_extensions(&cli.icon_extensions);

    if debug_enabled() {
        eprintln!("Toolbox directory: {}", reader.dir().display());
    }

    match cli.selected_command() {
        Commands::Apps => handle_apps(&reader, cli),
        Commands::Projects {
            query,
            installed_only,
        } => handle_projects(&reader, cli, query.as_deref(), installed_only),
        Commands::Paths => handle_paths(&reader, cli),
    }
}
