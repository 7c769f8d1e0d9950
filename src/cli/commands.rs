//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand, PartialEq)]
pub(crate) enum Commands {
    /// List projects with the application that opens them (default)
    Projects {
        /// Only show projects whose name or path contains this text
        query: Option<String>,

        /// Hide projects whose application is not installed
        #[arg(short, long)]
        installed_only: bool,
    },
    /// List installed applications
    Apps,
    /// Show where the Toolbox state files are expected
    Paths,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Projects {
            query: None,
            installed_only: false,
        }
    }
}
