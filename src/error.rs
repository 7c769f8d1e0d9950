use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Toolbox(#[from] ToolboxError),

    #[error("{0}")]
    Jq(#[from] JqError),

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while reading the Toolbox state files
#[derive(Debug, Error)]
pub(crate) enum ToolboxError {
    #[error("File not found: {}. Is {hint} installed?", .path.display())]
    FileNotFound { path: PathBuf, hint: &'static str },

    #[error("Failed to determine application icon file for {tool_id} in {}", .dir.display())]
    IconNotFound { tool_id: String, dir: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not determine the local data directory. Use --toolbox-dir to set it.")]
    NoDataDir,
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}
