//! Icon discovery next to an IDE launcher
//!
//! Toolbox does not record icon paths, so the launcher's directory is
//! searched for the first file with a known icon extension. Extensions are
//! tried in order; within one extension `glob` yields files sorted by name.
//! Which file wins when several icons share an extension is otherwise
//! unspecified.

use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

use crate::utils::debug_enabled;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// First icon file in `dir`, trying `extensions` in order
pub(super) fn find_icon(dir: &Path, extensions: &[String]) -> Option<PathBuf> {
    let escaped = Pattern::escape(&dir.to_string_lossy());

    for ext in extensions {
        let pattern = format!("{escaped}/*.{ext}");
        let entries = match glob::glob_with(&pattern, MATCH_OPTIONS) {
            Ok(entries) => entries,
            Err(err) => {
                if debug_enabled() {
                    eprintln!("Invalid icon pattern {pattern}: {err}");
                }
                continue;
            }
        };

        if let Some(icon) = entries.flatten().find(|p| p.is_file()) {
            return Some(icon);
        }
    }
    None
}

/// Directory to search for the launcher's icon
///
/// The launch command may contain `.` or `..` segments (e.g. `bin/../idea.sh`),
/// so the path is normalized lexically before taking its parent.
pub(super) fn icon_dir(launcher: &Path) -> PathBuf {
    match normalize(launcher).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_icon_with_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("idea.exe"), "").unwrap();
        fs::write(dir.path().join("idea.ico"), "").unwrap();

        let icon = find_icon(dir.path(), &exts(&["ico"])).unwrap();
        assert_eq!(icon.file_name().unwrap(), "idea.ico");
    }

    #[test]
    fn no_icon_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("idea.exe"), "").unwrap();

        assert!(find_icon(dir.path(), &exts(&["ico", "png"])).is_none());
    }

    #[test]
    fn earlier_extension_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "").unwrap();
        fs::write(dir.path().join("z.ico"), "").unwrap();

        let icon = find_icon(dir.path(), &exts(&["ico", "png"])).unwrap();
        assert_eq!(icon.file_name().unwrap(), "z.ico");
    }

    #[test]
    fn directories_are_not_icons() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("themes.ico")).unwrap();

        assert!(find_icon(dir.path(), &exts(&["ico"])).is_none());
    }

    #[test]
    fn glob_metacharacters_in_dir_are_literal() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("IDEA [2024]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("idea.ico"), "").unwrap();

        assert!(find_icon(&dir, &exts(&["ico"])).is_some());
    }

    #[test]
    fn icon_dir_resolves_parent_segments() {
        assert_eq!(
            icon_dir(Path::new("/opt/idea/bin/../idea.exe")),
            PathBuf::from("/opt/idea")
        );
        assert_eq!(
            icon_dir(Path::new("/opt/idea/./bin/idea.sh")),
            PathBuf::from("/opt/idea/bin")
        );
    }

    #[test]
    fn icon_dir_of_bare_file_is_current_dir() {
        assert_eq!(icon_dir(Path::new("idea.exe")), PathBuf::from("."));
    }
}
