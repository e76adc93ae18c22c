//! Secret references resolved from the environment.
//!
//! Checked-in configuration never carries credential values. A [`SecretRef`]
//! names the environment variable holding the value, and the value is read
//! at resolution time. Resolved values are wrapped in [`Secret`], which
//! redacts itself in `Debug` and `Display` output so secrets cannot leak
//! through logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecretError {
    /// The referenced environment variable is not set
    #[error("environment variable {0} is not set")]
    Missing(String),

    /// The referenced environment variable is set but blank
    #[error("environment variable {0} is empty")]
    Empty(String),
}

/// A reference to a secret by environment-variable name.
///
/// Serializes as the bare variable name, so a manifest entry reads
/// `mnemonic = "MNEMONIC"` rather than embedding the seed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretRef(String);

impl SecretRef {
    pub fn new(var: impl Into<String>) -> Self {
        Self(var.into())
    }

    /// Name of the environment variable this reference reads.
    pub fn var_name(&self) -> &str {
        &self.0
    }

    /// Read the referenced environment variable.
    ///
    /// Fails fast on a missing or blank value: deploying with an empty
    /// mnemonic must never pass silently.
    pub fn resolve(&self) -> Result<Secret, SecretError> {
        match std::env::var(&self.0) {
            Ok(value) if value.trim().is_empty() => Err(SecretError::Empty(self.0.clone())),
            Ok(value) => Ok(Secret(value)),
            Err(_) => Err(SecretError::Missing(self.0.clone())),
        }
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A resolved secret value.
///
/// The inner value is only reachable through [`Secret::expose`]; `Debug`
/// and `Display` print a redaction marker.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_set_variable() {
        std::env::set_var("SECRET_TEST_SET", "correct horse battery staple");
        let secret = SecretRef::new("SECRET_TEST_SET").resolve().unwrap();
        assert_eq!(secret.expose(), "correct horse battery staple");
    }

    #[test]
    fn missing_variable_fails() {
        let err = SecretRef::new("SECRET_TEST_UNSET").resolve().unwrap_err();
        assert_eq!(err, SecretError::Missing("SECRET_TEST_UNSET".into()));
    }

    #[test]
    fn blank_variable_fails() {
        std::env::set_var("SECRET_TEST_BLANK", "  ");
        let err = SecretRef::new("SECRET_TEST_BLANK").resolve().unwrap_err();
        assert_eq!(err, SecretError::Empty("SECRET_TEST_BLANK".into()));
    }

    #[test]
    fn debug_and_display_are_redacted() {
        std::env::set_var("SECRET_TEST_REDACT", "hunter2");
        let secret = SecretRef::new("SECRET_TEST_REDACT").resolve().unwrap();
        let debug = format!("{:?}", secret);
        let display = format!("{}", secret);
        assert!(!debug.contains("hunter2"));
        assert!(!display.contains("hunter2"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn ref_serializes_as_variable_name() {
        let json = serde_json::to_string(&SecretRef::new("MNEMONIC")).unwrap();
        assert_eq!(json, "\"MNEMONIC\"");
    }
}
