//! Network profiles for contract deployment.
//!
//! This crate provides:
//! - Network profiles (development, testnet, bsc, ropsten)
//! - A registry for profile lookup with network-id validation
//! - The deployment manifest (profiles, verification settings, compiler pin)

pub mod manifest;
pub mod network;
pub mod registry;

use thiserror::Error;

pub use manifest::{ApiKeys, CompilerConfig, DeploymentManifest};
pub use network::{built_in_profiles, Credentials, Endpoint, NetworkId, NetworkProfile};
pub use registry::ProfileRegistry;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Requested profile name is not defined
    #[error("unknown network profile: {0}")]
    UnknownProfile(String),

    /// Two profiles claim the same concrete network id
    #[error("network id {id} already declared by profile {existing}")]
    DuplicateNetworkId { id: u64, existing: String },

    /// Manifest file could not be read
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest file is not valid TOML
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}
