//! Provisioning error types.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur during the provisioning handoff.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template render failed: {0}")]
    Render(#[from] tera::Error),

    #[error("failed to write inventory {path}: {source}")]
    InventoryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("provisioning failed ({status}):\n{stderr}")]
    PlaybookFailed { status: ExitStatus, stderr: String },
}
