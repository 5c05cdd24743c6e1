//! The per-host load probe.

use tracing::{debug, info, warn};

use pgpick_core::{Load, LoadSample, ProbeConfig};

use crate::error::ProbeError;
use crate::session::SshSession;
use crate::uptime::parse_one_minute_load;

/// Measure the one-minute load average on `host`.
///
/// Never fails: connection, authentication, execution, and parse
/// problems are all reported as `Load::Unreachable` with a logged
/// cause, so a bad host ranks last instead of aborting the sibling
/// probe. One diagnostic line is emitted per host either way.
pub async fn probe(host: &str, config: &ProbeConfig) -> LoadSample {
    let load = match measure(host, config).await {
        Ok(value) => {
            info!(%host, load = value, "measured one-minute load");
            Load::Measured(value)
        }
        Err(err) => {
            warn!(%host, error = %err, "probe failed, marking host unreachable");
            Load::Unreachable
        }
    };

    LoadSample {
        host: host.to_string(),
        load,
    }
}

async fn measure(host: &str, config: &ProbeConfig) -> Result<f64, ProbeError> {
    let mut session = SshSession::connect(host, config).await?;

    // The session is closed before the command outcome is inspected so
    // no path leaks an open connection.
    let result = run_status_command(&mut session, &config.remote_command).await;
    if let Err(err) = session.close().await {
        debug!(%host, error = %err, "error closing ssh session");
    }

    result
}

async fn run_status_command(
    session: &mut SshSession,
    command: &str,
) -> Result<f64, ProbeError> {
    let output = session.exec(command).await?;

    if let Some(status) = output.exit_status {
        if status != 0 {
            return Err(ProbeError::RemoteStatus(status));
        }
    }

    parse_one_minute_load(&output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn unreachable_config() -> ProbeConfig {
        let mut config = ProbeConfig::new(PathBuf::from("/nonexistent/id_rsa"));
        config.connect_timeout = Duration::from_millis(200);
        config
    }

    #[tokio::test]
    async fn probe_failure_becomes_unreachable_sample() {
        // The key file does not exist, so the probe fails before any
        // network traffic and must report the sentinel.
        let sample = probe("198.51.100.1", &unreachable_config()).await;
        assert_eq!(sample.host, "198.51.100.1");
        assert_eq!(sample.load, Load::Unreachable);
    }

    #[tokio::test]
    async fn probe_preserves_host_identifier() {
        let sample = probe("db-a.internal", &unreachable_config()).await;
        assert_eq!(sample.host, "db-a.internal");
    }

    #[tokio::test]
    async fn missing_key_reports_key_load_error() {
        let err = SshSession::connect("198.51.100.1", &unreachable_config())
            .await
            .err()
            .expect("connect must fail without a key");
        assert!(matches!(err, ProbeError::KeyLoad { .. }));
    }
}
