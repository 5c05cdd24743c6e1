//! pgpick.toml configuration parser and the resolved config structs
//! handed to the probe and provisioning layers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional `pgpick.toml` file contents. Every field can be omitted;
/// CLI flags override whatever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PgpickConfig {
    #[serde(default)]
    pub probe: ProbeSection,
    #[serde(default)]
    pub provision: ProvisionSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeSection {
    pub key_path: Option<PathBuf>,
    pub username: Option<String>,
    pub port: Option<u16>,
    pub connect_timeout_secs: Option<u64>,
    pub remote_command: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionSection {
    pub template_path: Option<PathBuf>,
    pub inventory_path: Option<PathBuf>,
    pub playbook_path: Option<PathBuf>,
    pub ansible_binary: Option<String>,
}

impl PgpickConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PgpickConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolved settings for a load probe. Passed explicitly into the probe
/// so tests can substitute their own values; nothing is read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Private key used to authenticate against both candidates.
    pub key_path: PathBuf,
    /// Remote username, identical for both probes.
    pub username: String,
    /// SSH port.
    pub port: u16,
    /// Hard bound on connect + authentication.
    pub connect_timeout: Duration,
    /// Status command executed on the remote host.
    pub remote_command: String,
}

impl ProbeConfig {
    pub fn new(key_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            username: "root".to_string(),
            port: 22,
            connect_timeout: Duration::from_secs(10),
            remote_command: "uptime".to_string(),
        }
    }
}

/// Resolved settings for the provisioning handoff.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Inventory template with `primary_ip` / `secondary_ip` placeholders.
    pub template_path: PathBuf,
    /// Where the rendered inventory is written.
    pub inventory_path: PathBuf,
    /// Playbook handed to the provisioning tool.
    pub playbook_path: PathBuf,
    /// The provisioning binary to invoke.
    pub ansible_binary: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("inventory.yml.j2"),
            inventory_path: PathBuf::from("inventory.yml"),
            playbook_path: PathBuf::from("playbook.yml"),
            ansible_binary: "ansible-playbook".to_string(),
        }
    }
}
