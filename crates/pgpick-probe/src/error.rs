//! Probe error types.
//!
//! These never escape the probe boundary: `probe()` converts each of
//! them into `Load::Unreachable` and logs the cause.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while measuring one host.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to load private key {path}: {source}")]
    KeyLoad {
        path: PathBuf,
        #[source]
        source: russh_keys::Error,
    },

    #[error("ssh error: {0}")]
    Ssh(#[from] russh::Error),

    #[error("connection timed out after {0:?}")]
    Timeout(Duration),

    #[error("authentication rejected for user {0}")]
    AuthRejected(String),

    #[error("remote command exited with status {0}")]
    RemoteStatus(u32),

    #[error("no load average found in output {0:?}")]
    Parse(String),
}
