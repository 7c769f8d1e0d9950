//! Core data types produced from the Toolbox state files
//!
//! These are rebuilt from disk on every run and never written back.

use serde::Serialize;
use std::path::PathBuf;

/// An installed IDE that Toolbox manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Application {
    /// Toolbox tool id, e.g. "IDEA-U"
    pub(crate) id: String,
    pub(crate) channel_id: String,
    pub(crate) build_number: String,
    /// Install location joined with the launch command
    pub(crate) path: PathBuf,
    pub(crate) icon: PathBuf,
}

impl Application {
    /// True when this application is the installation named by an open item
    pub(crate) fn matches(&self, item: &OpenItem) -> bool {
        self.id == item.tool_id && self.channel_id == item.channel_id
    }

    /// Short label for tables, e.g. "IDEA-U 241.15989.150"
    pub(crate) fn label(&self) -> String {
        if self.build_number.is_empty() {
            self.id.clone()
        } else {
            format!("{} {}", self.id, self.build_number)
        }
    }
}

/// A (tool, channel) pair able to open a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenItem {
    pub(crate) tool_id: String,
    pub(crate) channel_id: String,
}

/// A project Toolbox has seen, with the application that opens it if installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Project {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) application: Option<Application>,
}

impl Project {
    /// Case-insensitive substring match on name or path
    pub(crate) fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.path.to_lowercase().contains(&query)
    }
}
