//! Profile lookup by name.

use crate::network::{built_in_profiles, NetworkId, NetworkProfile};
use crate::ProfileError;
use std::collections::BTreeMap;

/// An immutable-after-load set of named network profiles.
///
/// Insertion enforces the registry invariant: no two profiles may claim the
/// same concrete network id. The `"*"` wildcard is exempt, since any number
/// of local profiles can match an arbitrary chain.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, NetworkProfile>,
}

impl ProfileRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the stock profiles (development, testnet, bsc,
    /// ropsten).
    pub fn built_in() -> Self {
        Self {
            profiles: built_in_profiles(),
        }
    }

    /// Add or replace a profile.
    ///
    /// Replacing an existing name is allowed (a manifest overlay overrides
    /// a built-in); declaring a network id already held by a *different*
    /// profile is rejected.
    pub fn insert(&mut self, name: String, profile: NetworkProfile) -> Result<(), ProfileError> {
        if let NetworkId::Id(id) = profile.network_id {
            let taken = self
                .profiles
                .iter()
                .find(|(existing, p)| **existing != name && p.network_id == NetworkId::Id(id));
            if let Some((existing, _)) = taken {
                return Err(ProfileError::DuplicateNetworkId {
                    id,
                    existing: existing.clone(),
                });
            }
        }
        self.profiles.insert(name, profile);
        Ok(())
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Result<&NetworkProfile, ProfileError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Iterate profiles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.profiles.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
