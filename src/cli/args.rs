//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "toolbox-projects")]
#[command(
    about = "List JetBrains Toolbox IDEs and the projects they open",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Print jq string results without quotes (jq -r)
    #[arg(long, global = true, requires = "jq")]
    pub(crate) jq_raw: bool,

    /// Toolbox data directory (default: <local data dir>/JetBrains/Toolbox)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) toolbox_dir: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Compact output (fewer columns)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Enable debug output (skipped tools and projects, chosen icons)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Tool ids to hide from configuration
    #[arg(skip)]
    pub(crate) blacklist: Vec<String>,

    /// Icon extensions from configuration
    #[arg(skip)]
    pub(crate) icon_extensions: Vec<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them at false
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if config.installed_only {
            match &mut self.command {
                Some(Commands::Projects { installed_only, .. }) => *installed_only = true,
                None => {
                    self.command = Some(Commands::Projects {
                        query: None,
                        installed_only: true,
                    });
                }
                Some(_) => {}
            }
        }

        if self.toolbox_dir.is_none() {
            self.toolbox_dir = config.toolbox_dir.clone();
        }
        self.blacklist = config.blacklist.clone();
        self.icon_extensions = config.icon_extensions.clone();

        self
    }

    /// Subcommand to run, defaulting to `projects`
    pub(crate) fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    /// JSON is requested directly or implied by --jq
    pub(crate) fn wants_json(&self) -> bool {
        self.json || self.jq.is_some()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("toolbox-projects").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn default_command_is_projects() {
        let cli = parse(&[]);
        assert_eq!(cli.selected_command(), Commands::default());
    }

    #[test]
    fn projects_query_and_flag() {
        let cli = parse(&["projects", "api", "--installed-only"]);
        assert_eq!(
            cli.selected_command(),
            Commands::Projects {
                query: Some("api".to_string()),
                installed_only: true,
            }
        );
    }

    #[test]
    fn jq_implies_json() {
        let cli = parse(&["apps", "--jq", ".[].id"]);
        assert!(cli.wants_json());
        assert!(!cli.json);
    }

    #[test]
    fn jq_raw_requires_jq() {
        let result =
            Cli::try_parse_from(["toolbox-projects", "apps", "--jq-raw"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            toolbox_dir: Some(PathBuf::from("/from/config")),
            blacklist: vec!["Fleet".to_string()],
            compact: true,
            installed_only: true,
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["projects"]).with_config(&config);
        assert!(cli.compact);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.toolbox_dir, Some(PathBuf::from("/from/config")));
        assert_eq!(cli.blacklist, ["Fleet"]);
        assert!(matches!(
            cli.selected_command(),
            Commands::Projects {
                installed_only: true,
                ..
            }
        ));
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            toolbox_dir: Some(PathBuf::from("/from/config")),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["--toolbox-dir", "/from/cli", "--color", "always"]).with_config(&config);
        assert_eq!(cli.toolbox_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
