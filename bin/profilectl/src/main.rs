//! CLI tool to inspect deployment network profiles.
//!
//! Subcommands:
//! - `list`: print the available profile names
//! - `show`: print one profile's connection parameters
//! - `check`: verify a profile exists and its credentials resolve

use clap::{Parser, Subcommand};
use profile::DeploymentManifest;
use tracing::info;

#[derive(Parser)]
#[command(name = "profilectl")]
#[command(about = "Inspect network profiles used for contract deployment")]
struct Cli {
    /// Path to a TOML manifest layered over the built-in profiles
    #[arg(short, long)]
    manifest: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the available profile names
    List,

    /// Print one profile's connection parameters
    Show {
        /// Profile name, e.g. "bsc"
        name: String,

        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Verify a profile exists and its credentials resolve
    Check {
        /// Profile name, e.g. "bsc"
        name: String,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut manifest = DeploymentManifest::built_in();
    if let Some(path) = &cli.manifest {
        info!("Loading manifest: {}", path);
        manifest.merge(DeploymentManifest::from_file(path)?);
    }

    let registry = manifest.registry()?;

    match cli.command {
        Command::List => {
            for (name, profile) in registry.iter() {
                println!("{name}\t{}\t{}", profile.network_id, profile.endpoint);
            }
        }
        Command::Show { name, json } => {
            let profile = registry.get(&name)?;

            if json {
                println!("{}", serde_json::to_string_pretty(profile)?);
            } else {
                println!("{name}:");
                println!("  endpoint:       {}", profile.endpoint);
                println!("  network id:     {}", profile.network_id);
                if let Some(confirmations) = profile.confirmations {
                    println!("  confirmations:  {confirmations}");
                }
                if let Some(blocks) = profile.timeout_blocks {
                    println!("  timeout blocks: {blocks}");
                }
                if let Some(ms) = profile.check_timeout_ms {
                    println!("  check timeout:  {ms}ms");
                }
                println!("  skip dry run:   {}", profile.skip_dry_run);
                if let Some(credentials) = &profile.credentials {
                    println!("  mnemonic from:  {}", credentials.mnemonic);
                }
            }
        }
        Command::Check { name } => {
            let profile = registry.get(&name)?;
            info!("Profile found: {}", name);

            match &profile.credentials {
                Some(credentials) => {
                    credentials.mnemonic.resolve()?;
                    info!("  mnemonic: {} is set", credentials.mnemonic);

                    // A verification plugin without its key would fail at
                    // deploy time; surface that for remote targets here.
                    if manifest.plugins.iter().any(|p| p == "verify") {
                        if let Some(key) = &manifest.api_keys.etherscan {
                            key.resolve()?;
                            info!("  etherscan key: {} is set", key);
                        }
                    }
                }
                None => {
                    info!("  no credentials required");
                }
            }

            println!("ok: {name}");
        }
    }

    Ok(())
}
