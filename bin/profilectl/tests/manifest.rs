//! Manifest file loading and overlay merging, using the checked-in
//! tests/profiles.toml fixture.

use profile::{DeploymentManifest, Endpoint, NetworkId, ProfileError};

const FIXTURE: &str = "tests/profiles.toml";

#[test]
fn fixture_loads() {
    let overlay = DeploymentManifest::from_file(FIXTURE).expect("failed to load fixture");

    assert_eq!(overlay.networks.len(), 2);
    assert!(overlay.networks.contains_key("testnet"));
    assert!(overlay.networks.contains_key("fork"));
}

#[test]
fn overlay_overrides_built_ins_by_name() {
    let mut manifest = DeploymentManifest::built_in();
    manifest.merge(DeploymentManifest::from_file(FIXTURE).unwrap());

    // 4 built-ins, testnet replaced, fork added.
    assert_eq!(manifest.networks.len(), 5);

    let testnet = &manifest.networks["testnet"];
    assert_eq!(testnet.confirmations, Some(3));
    assert_eq!(testnet.network_id, NetworkId::Id(97));
    match &testnet.endpoint {
        Endpoint::Rpc { url } => assert!(url.contains("staging.internal")),
        Endpoint::Local { .. } => panic!("staging testnet should be a remote endpoint"),
    }

    let fork = &manifest.networks["fork"];
    assert_eq!(fork.network_id, NetworkId::Any);
    assert_eq!(fork.endpoint.to_string(), "127.0.0.1:9545");

    // The override keeps the registry invariant intact.
    let registry = manifest.registry().unwrap();
    assert_eq!(registry.len(), 5);
}

#[test]
fn overlay_replaces_verification_key() {
    let mut manifest = DeploymentManifest::built_in();
    manifest.merge(DeploymentManifest::from_file(FIXTURE).unwrap());

    let key = manifest.api_keys.etherscan.unwrap();
    assert_eq!(key.var_name(), "STAGING_ETHERSCAN_API_KEY");
    assert_eq!(manifest.compiler.unwrap().solc, "^0.8.0");
}

#[test]
fn colliding_network_id_is_rejected() {
    let mut manifest = DeploymentManifest::built_in();
    let overlay: DeploymentManifest = toml::from_str(
        r#"
        [networks.binance]
        url = "https://bsc-dataseed2.binance.org"
        network_id = 56
        skip_dry_run = true
        "#,
    )
    .unwrap();

    manifest.merge(overlay);

    let err = manifest.registry().unwrap_err();
    assert!(matches!(err, ProfileError::DuplicateNetworkId { id: 56, .. }));
}

#[test]
fn missing_manifest_file_is_an_io_error() {
    let err = DeploymentManifest::from_file("tests/does-not-exist.toml").unwrap_err();
    assert!(matches!(err, ProfileError::Io(_)));
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let overlay: Result<DeploymentManifest, _> = toml::from_str("networks = 12");
    assert!(overlay.is_err());
}
