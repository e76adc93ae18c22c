//! The deployment manifest: network profiles plus contract-verification
//! settings and the compiler pin, mirroring the shape the deployment tool
//! consumes.

use crate::network::built_in_profiles;
use crate::registry::ProfileRegistry;
use crate::{NetworkProfile, ProfileError};
use secret::SecretRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable holding the block-explorer verification key.
pub const ETHERSCAN_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// API keys for contract-verification services, as env references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etherscan: Option<SecretRef>,
}

/// Solidity compiler selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Semver requirement for solc, e.g. `^0.8.0`
    pub solc: String,
}

/// Top-level deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    /// Verification plugins to activate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Verification service keys
    #[serde(default)]
    pub api_keys: ApiKeys,

    /// Compiler pin, if the deployment fixes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerConfig>,

    /// Network profiles keyed by name
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl DeploymentManifest {
    /// The stock manifest: the four built-in profiles, the verification
    /// plugin with an etherscan key reference, and the `^0.8.0` solc pin.
    pub fn built_in() -> Self {
        Self {
            plugins: vec!["verify".into()],
            api_keys: ApiKeys {
                etherscan: Some(SecretRef::new(ETHERSCAN_KEY_VAR)),
            },
            compiler: Some(CompilerConfig {
                solc: "^0.8.0".into(),
            }),
            networks: built_in_profiles(),
        }
    }

    /// Load a manifest from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let contents = std::fs::read_to_string(path)?;
        let manifest = toml::from_str(&contents)?;

        Ok(manifest)
    }

    /// Layer `overlay` on top of this manifest.
    ///
    /// Networks override or extend by name; plugins, api keys and the
    /// compiler pin are replaced only when the overlay sets them.
    pub fn merge(&mut self, overlay: Self) {
        self.networks.extend(overlay.networks);
        if !overlay.plugins.is_empty() {
            self.plugins = overlay.plugins;
        }
        if overlay.api_keys.etherscan.is_some() {
            self.api_keys.etherscan = overlay.api_keys.etherscan;
        }
        if overlay.compiler.is_some() {
            self.compiler = overlay.compiler;
        }
    }

    /// Build the profile registry, validating network-id uniqueness.
    pub fn registry(&self) -> Result<ProfileRegistry, ProfileError> {
        let mut registry = ProfileRegistry::new();
        for (name, profile) in &self.networks {
            registry.insert(name.clone(), profile.clone())?;
        }

        Ok(registry)
    }
}
