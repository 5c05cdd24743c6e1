//! Thin SSH session wrapper around russh.
//!
//! One session per probe: connect + authenticate under a hard timeout,
//! run a single command, disconnect. The wrapper owns its connection
//! exclusively; nothing is shared between concurrent probes.

use std::sync::Arc;

use russh::client::{self, Handle};
use russh::{ChannelMsg, Disconnect};
use russh_keys::key;
use tracing::debug;

use pgpick_core::ProbeConfig;

use crate::error::ProbeError;

/// Accepts any server host key. The tool connects to freshly
/// provisioned machines whose keys are not yet known.
struct AcceptAll;

#[async_trait::async_trait]
impl client::Handler for AcceptAll {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        _server_public_key: &key::PublicKey,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Output of a single remote command.
#[derive(Debug)]
pub struct ExecOutput {
    pub stdout: String,
    pub exit_status: Option<u32>,
}

/// An authenticated SSH session against one host.
pub struct SshSession {
    handle: Handle<AcceptAll>,
}

impl SshSession {
    /// Connect to `host` and authenticate with the configured key.
    ///
    /// The whole dial + handshake + authentication sequence is bounded
    /// by `config.connect_timeout` so one dead host cannot stall the
    /// selection.
    pub async fn connect(host: &str, config: &ProbeConfig) -> Result<Self, ProbeError> {
        let key_pair =
            russh_keys::load_secret_key(&config.key_path, None).map_err(|source| {
                ProbeError::KeyLoad {
                    path: config.key_path.clone(),
                    source,
                }
            })?;

        let ssh_config = Arc::new(client::Config {
            inactivity_timeout: Some(config.connect_timeout),
            ..Default::default()
        });

        let connect_and_auth = async {
            let mut handle =
                client::connect(ssh_config, (host, config.port), AcceptAll).await?;
            let authenticated = handle
                .authenticate_publickey(config.username.as_str(), Arc::new(key_pair))
                .await?;
            Ok::<_, ProbeError>((handle, authenticated))
        };

        let (handle, authenticated) =
            tokio::time::timeout(config.connect_timeout, connect_and_auth)
                .await
                .map_err(|_| ProbeError::Timeout(config.connect_timeout))??;

        if !authenticated {
            return Err(ProbeError::AuthRejected(config.username.clone()));
        }

        debug!(%host, port = config.port, "ssh session established");
        Ok(Self { handle })
    }

    /// Run `command` and capture its stdout and exit status.
    pub async fn exec(&mut self, command: &str) -> Result<ExecOutput, ProbeError> {
        let mut channel = self.handle.channel_open_session().await?;
        channel.exec(true, command).await?;

        let mut stdout = Vec::new();
        let mut exit_status = None;
        while let Some(msg) = channel.wait().await {
            match msg {
                ChannelMsg::Data { ref data } => stdout.extend_from_slice(data),
                ChannelMsg::ExitStatus { exit_status: status } => {
                    exit_status = Some(status);
                }
                _ => {}
            }
        }

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            exit_status,
        })
    }

    /// Disconnect. Called on every path once a session exists.
    pub async fn close(&mut self) -> Result<(), ProbeError> {
        self.handle
            .disconnect(Disconnect::ByApplication, "", "English")
            .await?;
        Ok(())
    }
}
