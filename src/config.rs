use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "toolbox-projects";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Toolbox data directory, overriding the platform default
    #[serde(default)]
    pub(crate) toolbox_dir: Option<PathBuf>,
    /// Extra tool ids to hide, in addition to the built-in blacklist
    #[serde(default)]
    pub(crate) blacklist: Vec<String>,
    #[serde(default)]
    pub(crate) icon_extensions: Vec<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) installed_only: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    /// Load without status messages (JSON output must stay clean on stderr too)
    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content, &path) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    /// Parse config text; a relative `toolbox_dir` resolves against the config file's directory
    fn parse(content: &str, path: &Path) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if let Some(dir) = config.toolbox_dir.take() {
            let resolved = match path.parent() {
                Some(base) if dir.is_relative() => base.join(dir),
                _ => dir,
            };
            config.toolbox_dir = Some(resolved);
        }
        Ok(config)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/toolbox-projects/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS, AppData\Roaming on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.toolbox-projects.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains(APP_DIR)));
    }

    #[test]
    fn parse_full_config() {
        let content = r#"
toolbox_dir = "/data/JetBrains/Toolbox"
blacklist = ["Fleet"]
icon_extensions = ["png"]
compact = true
installed_only = true
color = "never"
"#;
        let config = Config::parse(content, Path::new("/home/me/.toolbox-projects.toml")).unwrap();
        assert_eq!(
            config.toolbox_dir,
            Some(PathBuf::from("/data/JetBrains/Toolbox"))
        );
        assert_eq!(config.blacklist, ["Fleet"]);
        assert_eq!(config.icon_extensions, ["png"]);
        assert!(config.compact);
        assert!(config.installed_only);
        assert!(!config.debug);
        assert_eq!(config.color, Some(ConfigColorMode::Never));
    }

    #[test]
    fn relative_toolbox_dir_resolves_against_config_file() {
        let config = Config::parse(
            r#"toolbox_dir = "toolbox""#,
            Path::new("/home/me/.config/toolbox-projects/config.toml"),
        )
        .unwrap();
        assert_eq!(
            config.toolbox_dir,
            Some(PathBuf::from("/home/me/.config/toolbox-projects/toolbox"))
        );
    }

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("", Path::new("/tmp/config.toml")).unwrap();
        assert!(config.toolbox_dir.is_none());
        assert!(config.blacklist.is_empty());
        assert!(config.color.is_none());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Config::parse(r#"color = "purple""#, Path::new("/tmp/config.toml")).is_err());
    }
}
