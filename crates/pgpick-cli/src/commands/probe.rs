//! `pgpick probe` — one-off load measurement for a single host.

use std::path::Path;

use anyhow::bail;

use super::{SshOpts, load_file_config};

pub async fn run(
    host: &str,
    config_path: Option<&Path>,
    ssh: &SshOpts,
    format: &str,
) -> anyhow::Result<()> {
    let file = load_file_config(config_path)?;
    let probe_config = ssh.resolve(&file)?;

    let sample = pgpick_probe::probe(host, &probe_config).await;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&sample)?),
        "text" => println!("{}: {}", sample.host, sample.load),
        other => bail!("unknown format {other:?}, expected text or json"),
    }
    Ok(())
}
