//! `pgpick deploy` — probe, rank, render, provision.

use std::path::Path;

use anyhow::bail;

use super::{ProvisionOpts, SshOpts, load_file_config};

pub async fn run(
    hosts: &str,
    config_path: Option<&Path>,
    ssh: &SshOpts,
    provision: &ProvisionOpts,
) -> anyhow::Result<()> {
    // Input validation happens before any probing.
    let (first, second) = parse_host_list(hosts)?;

    let file = load_file_config(config_path)?;
    let probe_config = ssh.resolve(&file)?;
    let provision_config = provision.resolve(&file);

    let pair = pgpick_rank::rank(&first, &second, &probe_config).await?;
    println!("✓ Primary: {} (secondary: {})", pair.primary, pair.secondary);

    let inventory = pgpick_provision::render_inventory(&pair, &provision_config)?;
    println!("  Inventory: {}", inventory.display());

    let playbook_output = pgpick_provision::run_playbook(&inventory, &provision_config).await?;
    print!("{playbook_output}");
    println!("✓ Provisioning complete");
    Ok(())
}

/// Split the single comma-separated host argument into exactly two
/// distinct, non-empty hosts.
fn parse_host_list(input: &str) -> anyhow::Result<(String, String)> {
    let hosts: Vec<&str> = input.split(',').map(str::trim).collect();

    if hosts.len() != 2 {
        bail!(
            "expected exactly 2 comma-separated hosts, got {}",
            hosts.len()
        );
    }
    if hosts.iter().any(|host| host.is_empty()) {
        bail!("host list contains an empty entry: {input:?}");
    }
    if hosts[0] == hosts[1] {
        bail!("candidate hosts must be distinct: {}", hosts[0]);
    }

    Ok((hosts[0].to_string(), hosts[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hosts_parse() {
        let (a, b) = parse_host_list("db-a,db-b").unwrap();
        assert_eq!(a, "db-a");
        assert_eq!(b, "db-b");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let (a, b) = parse_host_list(" 10.0.0.1 , 10.0.0.2 ").unwrap();
        assert_eq!(a, "10.0.0.1");
        assert_eq!(b, "10.0.0.2");
    }

    #[test]
    fn one_host_is_rejected() {
        assert!(parse_host_list("db-a").is_err());
    }

    #[test]
    fn three_hosts_are_rejected() {
        assert!(parse_host_list("a,b,c").is_err());
    }

    #[test]
    fn empty_entry_is_rejected() {
        assert!(parse_host_list("db-a,").is_err());
        assert!(parse_host_list(",db-b").is_err());
    }

    #[test]
    fn duplicate_hosts_are_rejected() {
        assert!(parse_host_list("db-a,db-a").is_err());
    }
}
