mod application;
mod format;
mod paths;
mod project;

pub(crate) use application::{ApplicationTableOptions, output_application_json, print_application_table};
pub(crate) use paths::{output_paths_json, print_paths_table};
pub(crate) use project::{ProjectTableOptions, output_project_json, print_project_table};
