//! JetBrains Toolbox state reader
//!
//! Toolbox keeps two JSON files under its data directory:
//! `state.json` lists the installed tools and `cache/intellij_projects.json`
//! lists recent projects together with the tools able to open them.

mod icon;
mod projects;
mod state;

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::core::{Application, Project};
use crate::error::ToolboxError;

const STATE_FILE: &str = "state.json";
const CACHE_SUBDIR: &str = "cache";
const PROJECTS_FILE: &str = "intellij_projects.json";

/// Tools listed in `state.json` that are not IDEs and never open projects
pub(crate) const BLACKLISTED_TOOL_IDS: &[&str] = &["Space"];

/// Icon extensions searched next to the launcher, in priority order
pub(crate) const DEFAULT_ICON_EXTENSIONS: &[&str] = &["ico", "svg", "png"];

/// Default Toolbox data directory: `<local data dir>/JetBrains/Toolbox`
pub(crate) fn default_toolbox_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("JetBrains").join("Toolbox"))
}

/// Reads applications and projects from one Toolbox data directory
#[derive(Debug, Clone)]
pub(crate) struct ToolboxReader {
    dir: PathBuf,
    blacklist: Vec<String>,
    icon_extensions: Vec<String>,
}

impl ToolboxReader {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            blacklist: BLACKLISTED_TOOL_IDS.iter().map(|s| s.to_string()).collect(),
            icon_extensions: DEFAULT_ICON_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Use `dir` when given, otherwise the platform default
    pub(crate) fn locate(dir: Option<PathBuf>) -> Result<Self, ToolboxError> {
        match dir.or_else(default_toolbox_dir) {
            Some(dir) => Ok(Self::new(dir)),
            None => Err(ToolboxError::NoDataDir),
        }
    }

    /// Add tool ids to skip on top of the built-in blacklist
    pub(crate) fn with_blacklist(mut self, extra: &[String]) -> Self {
        for id in extra {
            if !self.blacklist.contains(id) {
                self.blacklist.push(id.clone());
            }
        }
        self
    }

    /// Replace the icon extensions; an empty list keeps the defaults
    pub(crate) fn with_icon_extensions(mut self, extensions: &[String]) -> Self {
        if !extensions.is_empty() {
            self.icon_extensions = extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        self
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    pub(crate) fn projects_path(&self) -> PathBuf {
        self.dir.join(CACHE_SUBDIR).join(PROJECTS_FILE)
    }

    pub(crate) fn is_blacklisted(&self, tool_id: &str) -> bool {
        self.blacklist.iter().any(|id| id == tool_id)
    }

    pub(crate) fn icon_extensions(&self) -> &[String] {
        &self.icon_extensions
    }

    /// Load installed applications from `state.json`, in file order
    pub(crate) fn applications(&self) -> Result<Vec<Application>, ToolboxError> {
        state::load_applications(self)
    }

    /// Load projects from the project cache and attach the matching application
    pub(crate) fn projects(&self, applications: &[Application]) -> Result<Vec<Project>, ToolboxError> {
        projects::load_projects(self, applications)
    }
}

/// Deserialize a whole JSON file; a missing file maps to `FileNotFound`
fn read_json<T: DeserializeOwned>(path: &Path, hint: &'static str) -> Result<T, ToolboxError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ToolboxError::FileNotFound {
                path: path.to_path_buf(),
                hint,
            });
        }
        Err(source) => {
            return Err(ToolboxError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ToolboxError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_locations_follow_toolbox_layout() {
        let reader = ToolboxReader::new("/data/JetBrains/Toolbox");
        assert_eq!(
            reader.state_path(),
            PathBuf::from("/data/JetBrains/Toolbox/state.json")
        );
        assert_eq!(
            reader.projects_path(),
            PathBuf::from("/data/JetBrains/Toolbox/cache/intellij_projects.json")
        );
    }

    #[test]
    fn builtin_blacklist_is_always_applied() {
        let reader = ToolboxReader::new("/tmp").with_blacklist(&["Fleet".to_string()]);
        assert!(reader.is_blacklisted("Space"));
        assert!(reader.is_blacklisted("Fleet"));
        assert!(!reader.is_blacklisted("IDEA-U"));
    }

    #[test]
    fn icon_extensions_strip_leading_dot() {
        let reader = ToolboxReader::new("/tmp").with_icon_extensions(&[".png".to_string()]);
        assert_eq!(reader.icon_extensions(), ["png".to_string()]);

        let reader = ToolboxReader::new("/tmp").with_icon_extensions(&[]);
        assert_eq!(reader.icon_extensions().len(), DEFAULT_ICON_EXTENSIONS.len());
    }

    #[test]
    fn locate_prefers_explicit_dir() {
        let reader = ToolboxReader::locate(Some(PathBuf::from("/custom"))).unwrap();
        assert_eq!(reader.dir(), Path::new("/custom"));
    }

    #[test]
    fn read_json_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = read_json::<serde_json::Value>(&path, "toolbox").unwrap_err();
        assert!(matches!(err, ToolboxError::FileNotFound { hint: "toolbox", .. }));
    }

    #[test]
    fn read_json_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_json::<serde_json::Value>(&path, "toolbox").unwrap_err();
        assert!(matches!(err, ToolboxError::Parse { .. }));
    }
}
