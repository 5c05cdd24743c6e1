//! Subcommand implementations and flag → config resolution.
//!
//! Precedence for every setting: CLI flag, then pgpick.toml, then the
//! built-in default.

pub mod deploy;
pub mod probe;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use pgpick_core::{PgpickConfig, ProbeConfig, ProvisionConfig};

/// SSH flags shared by `deploy` and `probe`.
#[derive(Debug, Args)]
pub struct SshOpts {
    /// Path to the private key used for authentication.
    #[arg(short, long)]
    pub key: Option<PathBuf>,

    /// Remote username.
    #[arg(long)]
    pub user: Option<String>,

    /// SSH port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Connection timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Status command executed on the remote host.
    #[arg(long)]
    pub command: Option<String>,
}

impl SshOpts {
    pub fn resolve(&self, file: &PgpickConfig) -> anyhow::Result<ProbeConfig> {
        let section = &file.probe;

        let key_path = self
            .key
            .clone()
            .or_else(|| section.key_path.clone())
            .context("no private key configured: pass --key or set probe.key_path in pgpick.toml")?;

        let mut config = ProbeConfig::new(key_path);
        if let Some(user) = self.user.clone().or_else(|| section.username.clone()) {
            config.username = user;
        }
        if let Some(port) = self.port.or(section.port) {
            config.port = port;
        }
        if let Some(secs) = self.timeout.or(section.connect_timeout_secs) {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(command) = self
            .command
            .clone()
            .or_else(|| section.remote_command.clone())
        {
            config.remote_command = command;
        }
        Ok(config)
    }
}

/// Provisioning flags for `deploy`.
#[derive(Debug, Args)]
pub struct ProvisionOpts {
    /// Inventory template path.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Rendered inventory path.
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Playbook path.
    #[arg(long)]
    pub playbook: Option<PathBuf>,

    /// Provisioning binary.
    #[arg(long)]
    pub ansible_bin: Option<String>,
}

impl ProvisionOpts {
    pub fn resolve(&self, file: &PgpickConfig) -> ProvisionConfig {
        let section = &file.provision;
        let mut config = ProvisionConfig::default();

        if let Some(template) = self.template.clone().or_else(|| section.template_path.clone()) {
            config.template_path = template;
        }
        if let Some(inventory) = self
            .inventory
            .clone()
            .or_else(|| section.inventory_path.clone())
        {
            config.inventory_path = inventory;
        }
        if let Some(playbook) = self.playbook.clone().or_else(|| section.playbook_path.clone()) {
            config.playbook_path = playbook;
        }
        if let Some(binary) = self
            .ansible_bin
            .clone()
            .or_else(|| section.ansible_binary.clone())
        {
            config.ansible_binary = binary;
        }
        config
    }
}

/// Load the file config: an explicit `--config` path, else `./pgpick.toml`
/// when present, else the built-in defaults.
pub fn load_file_config(path: Option<&Path>) -> anyhow::Result<PgpickConfig> {
    match path {
        Some(explicit) => PgpickConfig::from_file(explicit)
            .with_context(|| format!("failed to load {}", explicit.display())),
        None => {
            let default = Path::new("pgpick.toml");
            if default.is_file() {
                PgpickConfig::from_file(default).context("failed to load ./pgpick.toml")
            } else {
                Ok(PgpickConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgpick_core::config::ProbeSection;

    fn empty_ssh_opts() -> SshOpts {
        SshOpts {
            key: None,
            user: None,
            port: None,
            timeout: None,
            command: None,
        }
    }

    #[test]
    fn resolve_requires_a_key() {
        let opts = empty_ssh_opts();
        assert!(opts.resolve(&PgpickConfig::default()).is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let mut opts = empty_ssh_opts();
        opts.key = Some(PathBuf::from("/cli/key"));
        opts.port = Some(2222);

        let file = PgpickConfig {
            probe: ProbeSection {
                key_path: Some(PathBuf::from("/file/key")),
                username: Some("deploy".to_string()),
                port: Some(22),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = opts.resolve(&file).unwrap();
        assert_eq!(config.key_path, PathBuf::from("/cli/key"));
        assert_eq!(config.port, 2222);
        // Untouched flags fall back to the file.
        assert_eq!(config.username, "deploy");
        // And to the built-in default below that.
        assert_eq!(config.remote_command, "uptime");
    }

    #[test]
    fn provision_opts_fall_back_to_defaults() {
        let opts = ProvisionOpts {
            template: None,
            inventory: None,
            playbook: Some(PathBuf::from("site.yml")),
            ansible_bin: None,
        };

        let config = opts.resolve(&PgpickConfig::default());
        assert_eq!(config.playbook_path, PathBuf::from("site.yml"));
        assert_eq!(config.inventory_path, PathBuf::from("inventory.yml"));
        assert_eq!(config.ansible_binary, "ansible-playbook");
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pgpick.toml");
        std::fs::write(&path, "[probe]\nusername = \"postgres\"\n").unwrap();

        let file = load_file_config(Some(&path)).unwrap();
        assert_eq!(file.probe.username.as_deref(), Some("postgres"));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_file_config(Some(&path)).is_err());
    }
}
