//! Installed applications from Toolbox `state.json`

use serde::Deserialize;
use std::path::Path;

use crate::core::Application;
use crate::error::ToolboxError;
use crate::utils::debug_enabled;

use super::icon::{find_icon, icon_dir};
use super::{ToolboxReader, read_json};

// ============================================================================
// Internal types for state.json
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct State {
    #[serde(default)]
    tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    tool_id: Option<String>,
    channel_id: Option<String>,
    build_number: Option<String>,
    install_location: Option<String>,
    launch_command: Option<String>,
}

// ============================================================================
// Loading
// ============================================================================

pub(super) fn load_applications(reader: &ToolboxReader) -> Result<Vec<Application>, ToolboxError> {
    let path = reader.state_path();
    let state: State = read_json(&path, "toolbox V2")?;
    if debug_enabled() {
        eprintln!("Read {} tools from {}", state.tools.len(), path.display());
    }
    build_applications(state.tools, reader)
}

fn build_applications(
    tools: Vec<Tool>,
    reader: &ToolboxReader,
) -> Result<Vec<Application>, ToolboxError> {
    let mut applications = Vec::new();

    for tool in tools {
        let tool_id = tool.tool_id.unwrap_or_default();
        if reader.is_blacklisted(&tool_id) {
            if debug_enabled() {
                eprintln!("Skipping blacklisted tool {tool_id}");
            }
            continue;
        }

        let launch_command = tool.launch_command.unwrap_or_default();
        if launch_command.is_empty() {
            if debug_enabled() {
                eprintln!("Skipping tool {tool_id}: no launch command");
            }
            continue;
        }

        let install_location = tool.install_location.unwrap_or_default();
        let path = Path::new(&install_location).join(&launch_command);

        let dir = icon_dir(&path);
        let icon = find_icon(&dir, reader.icon_extensions()).ok_or_else(|| {
            ToolboxError::IconNotFound {
                tool_id: tool_id.clone(),
                dir: dir.clone(),
            }
        })?;
        if debug_enabled() {
            eprintln!("Using icon {} for {tool_id}", icon.display());
        }

        applications.push(Application {
            id: tool_id,
            channel_id: tool.channel_id.unwrap_or_default(),
            build_number: tool.build_number.unwrap_or_default(),
            path,
            icon,
        });
    }

    Ok(applications)
}
