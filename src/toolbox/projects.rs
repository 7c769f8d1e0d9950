//! Recent projects from the Toolbox project cache
//!
//! Each cache entry names the channel it was last opened with
//! (`defaultNewOpenItem`) and a list of (tool, channel) pairs able to open
//! it. The matching pair is looked up in the installed applications.

use serde::Deserialize;

use crate::core::{Application, OpenItem, Project};
use crate::error::ToolboxError;
use crate::utils::debug_enabled;

use super::{ToolboxReader, read_json};

// ============================================================================
// Internal types for intellij_projects.json
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectEntry {
    name: Option<String>,
    path: Option<String>,
    /// Channel id of the preferred open item; null when the IDE is not installed
    default_new_open_item: Option<String>,
    new_open_items: Option<Vec<OpenItemEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenItemEntry {
    tool_id: Option<String>,
    channel_id: Option<String>,
}

impl ProjectEntry {
    fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// The open item whose channel equals the default open target
    fn default_open_item(&self) -> Option<OpenItem> {
        let channel = self.default_new_open_item.as_deref()?;
        self.new_open_items
            .iter()
            .flatten()
            .find(|item| item.channel_id.as_deref() == Some(channel))
            .map(|item| OpenItem {
                tool_id: item.tool_id.clone().unwrap_or_default(),
                channel_id: channel.to_string(),
            })
    }
}

// ============================================================================
// Loading and correlation
// ============================================================================

pub(super) fn load_projects(
    reader: &ToolboxReader,
    applications: &[Application],
) -> Result<Vec<Project>, ToolboxError> {
    let path = reader.projects_path();
    let entries: Vec<ProjectEntry> = read_json(&path, "toolbox")?;
    if debug_enabled() {
        eprintln!("Read {} projects from {}", entries.len(), path.display());
    }
    Ok(correlate(entries, applications))
}

/// Join project entries to applications on (tool id, channel id)
///
/// Entries without a default open target, or whose target is not among their
/// own open items, are dropped. Entries whose open item matches no
/// application are kept with `application: None`.
fn correlate(entries: Vec<ProjectEntry>, applications: &[Application]) -> Vec<Project> {
    let mut projects = Vec::new();

    for entry in entries {
        if entry.default_new_open_item.is_none() {
            if debug_enabled() {
                eprintln!(
                    "Skipping project {}: application not installed",
                    entry.display_name()
                );
            }
            continue;
        }

        let Some(item) = entry.default_open_item() else {
            if debug_enabled() {
                eprintln!(
                    "Skipping project {}: no open item for channel {}",
                    entry.display_name(),
                    entry.default_new_open_item.as_deref().unwrap_or_default()
                );
            }
            continue;
        };

        let application = applications.iter().find(|app| app.matches(&item)).cloned();
        if application.is_none() && debug_enabled() {
            eprintln!(
                "No installed application {} ({}) for project {}",
                item.tool_id,
                item.channel_id,
                entry.display_name()
            );
        }

        projects.push(Project {
            name: entry.name.unwrap_or_default(),
            path: entry.path.unwrap_or_default(),
            application,
        });
    }

    projects
}
