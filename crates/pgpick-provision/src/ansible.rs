//! ansible-playbook invocation.

use std::path::Path;

use tokio::process::Command;
use tracing::info;

use pgpick_core::ProvisionConfig;

use crate::error::ProvisionError;

/// Run the provisioning playbook against the rendered inventory.
///
/// Returns the tool's captured stdout so the caller can surface it to
/// the operator. A nonzero exit status is fatal and carries the
/// captured stderr verbatim.
pub async fn run_playbook(
    inventory: &Path,
    config: &ProvisionConfig,
) -> Result<String, ProvisionError> {
    info!(
        playbook = %config.playbook_path.display(),
        inventory = %inventory.display(),
        "running provisioning playbook"
    );

    let output = Command::new(&config.ansible_binary)
        .arg("-i")
        .arg(inventory)
        .arg(&config.playbook_path)
        .output()
        .await
        .map_err(|source| ProvisionError::Spawn {
            binary: config.ansible_binary.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProvisionError::PlaybookFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    info!("provisioning playbook completed");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
