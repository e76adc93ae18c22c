//! Network profile definitions for contract deployment.
//!
//! Provides connection parameters and transaction-finality settings for the
//! networks a deployment targets (local development node, BSC testnet and
//! mainnet, Ropsten).

use secret::SecretRef;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the deployer mnemonic.
pub const MNEMONIC_VAR: &str = "MNEMONIC";

/// Chain identifier a profile is matched against.
///
/// `Any` is the `"*"` wildcard used for local development nodes, which pick
/// an arbitrary id at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkId {
    Any,
    Id(u64),
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Self::Any);
        }
        s.parse()
            .map(Self::Id)
            .map_err(|_| format!("invalid network id: {s}"))
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Id(id) => serializer.serialize_u64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(id) => Ok(Self::Id(id)),
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// Where a profile connects: a local node by host and port, or a remote
/// RPC endpoint by url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Local { host: String, port: u16 },
    Rpc { url: String },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { host, port } => write!(f, "{host}:{port}"),
            Self::Rpc { url } => f.write_str(url),
        }
    }
}

/// Credentials a profile needs for signing, held as environment-variable
/// references rather than literal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// HD wallet mnemonic used to derive the deployer key
    pub mnemonic: SecretRef,
}

impl Credentials {
    /// Mnemonic sourced from the default `MNEMONIC` variable.
    pub fn from_env() -> Self {
        Self {
            mnemonic: SecretRef::new(MNEMONIC_VAR),
        }
    }
}

/// Connection and finality parameters for one deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Endpoint to connect to
    #[serde(flatten)]
    pub endpoint: Endpoint,

    /// Chain identifier, `"*"` for a local development node
    pub network_id: NetworkId,

    /// Block confirmations to await after each transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u32>,

    /// Block-count timeout for pending transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_blocks: Option<u32>,

    /// Network reachability check timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_timeout_ms: Option<u64>,

    /// Skip the simulated pre-flight deployment
    #[serde(default)]
    pub skip_dry_run: bool,

    /// Signing credentials, absent for the local development node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

impl NetworkProfile {
    /// Local development node.
    pub fn development() -> Self {
        Self {
            endpoint: Endpoint::Local {
                host: "127.0.0.1".into(),
                port: 8545,
            },
            network_id: NetworkId::Any,
            confirmations: None,
            timeout_blocks: None,
            check_timeout_ms: None,
            skip_dry_run: false,
            credentials: None,
        }
    }

    /// BSC testnet (chain id 97).
    pub fn testnet() -> Self {
        Self {
            endpoint: Endpoint::Rpc {
                url: "https://data-seed-prebsc-1-s1.binance.org:8545".into(),
            },
            network_id: NetworkId::Id(97),
            confirmations: Some(10),
            timeout_blocks: Some(200),
            check_timeout_ms: Some(10_000),
            skip_dry_run: true,
            credentials: Some(Credentials::from_env()),
        }
    }

    /// BSC mainnet (chain id 56).
    pub fn bsc() -> Self {
        Self {
            endpoint: Endpoint::Rpc {
                url: "https://bsc-dataseed1.binance.org".into(),
            },
            network_id: NetworkId::Id(56),
            confirmations: Some(10),
            timeout_blocks: Some(200),
            check_timeout_ms: None,
            skip_dry_run: true,
            credentials: Some(Credentials::from_env()),
        }
    }

    /// Ropsten via Infura (chain id 3).
    pub fn ropsten() -> Self {
        Self {
            endpoint: Endpoint::Rpc {
                url: "https://ropsten.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161".into(),
            },
            network_id: NetworkId::Id(3),
            confirmations: Some(10),
            timeout_blocks: Some(200),
            check_timeout_ms: Some(10_000),
            skip_dry_run: true,
            credentials: Some(Credentials::from_env()),
        }
    }
}

/// The stock profiles, keyed by name.
pub fn built_in_profiles() -> BTreeMap<String, NetworkProfile> {
    BTreeMap::from([
        ("development".into(), NetworkProfile::development()),
        ("testnet".into(), NetworkProfile::testnet()),
        ("bsc".into(), NetworkProfile::bsc()),
        ("ropsten".into(), NetworkProfile::ropsten()),
    ])
}
