use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::{ProvisionOpts, SshOpts};

#[derive(Parser)]
#[command(
    name = "pgpick",
    about = "pgpick — pick the least-loaded host pair and hand off to provisioning",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe both candidates, select primary/secondary, render the
    /// inventory, and run the provisioning playbook.
    Deploy {
        /// Comma-separated list of exactly two candidate hosts.
        hosts: String,

        /// Optional pgpick.toml (defaults to ./pgpick.toml when present).
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        ssh: SshOpts,

        #[command(flatten)]
        provision: ProvisionOpts,
    },
    /// Measure the load of a single host.
    Probe {
        /// Host to probe.
        host: String,

        /// Optional pgpick.toml (defaults to ./pgpick.toml when present).
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        ssh: SshOpts,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pgpick=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            hosts,
            config,
            ssh,
            provision,
        } => commands::deploy::run(&hosts, config.as_deref(), &ssh, &provision).await,
        Commands::Probe {
            host,
            config,
            ssh,
            format,
        } => commands::probe::run(&host, config.as_deref(), &ssh, &format).await,
    }
}
