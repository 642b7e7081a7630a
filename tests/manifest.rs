/// External-contract tests against the bundle shipped in this repository
///
/// These exercise the manifest the way an external package loader would:
/// load it once, then rely on its identity fields and asset paths.

use anyhow::Result;
use n8n_nodes_brainsait::{DocumentKey, PackageConfig, PackageManifest, WorkflowKey};

/// Capture loader logs when a test fails
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn manifest_exposes_package_identity() -> Result<()> {
    init_tracing();
    let manifest = PackageManifest::load_bundled()?;

    assert!(!manifest.name.is_empty());
    assert!(!manifest.version.is_empty());
    assert_eq!(manifest.name, "n8n-nodes-brainsait");
    assert_eq!(manifest.version, "1.0.0");
    assert_eq!(manifest.metadata.license, "MIT");
    assert_eq!(manifest.metadata.email, "fadil@brainsait.com");

    Ok(())
}

#[test]
fn manifest_contains_exactly_the_five_workflow_keys() -> Result<()> {
    init_tracing();
    let manifest = PackageManifest::load_bundled()?;

    let keys: Vec<&str> = manifest.workflows.keys().map(|k| k.as_str()).collect();
    let mut expected = vec![
        "masterlinc",
        "ttlinc",
        "patientPortal",
        "systemHealth",
        "terryMonitor",
    ];
    expected.sort_unstable();
    let mut actual = keys.clone();
    actual.sort_unstable();
    assert_eq!(actual, expected);

    Ok(())
}

#[test]
fn every_declared_asset_resolves_to_a_readable_file() -> Result<()> {
    init_tracing();
    let root = PackageConfig::bundled().package_root;
    let manifest = PackageManifest::load(&root)?;

    for (key, asset) in &manifest.workflows {
        let full = root.join(&asset.path);
        let content = std::fs::read_to_string(&full)?;
        assert!(!content.is_empty(), "empty workflow file for {}", key.as_str());
        // The definition carried in the manifest is the parsed file content.
        let reparsed: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(reparsed, asset.definition);
    }

    assert!(root.join(&manifest.schema).is_file());
    for key in DocumentKey::ALL {
        assert!(
            root.join(&manifest.documentation[&key]).is_file(),
            "missing documentation file for {}",
            key.as_str()
        );
    }

    Ok(())
}

#[test]
fn repeated_retrieval_is_idempotent() -> Result<()> {
    init_tracing();
    let first = PackageManifest::load_bundled()?;
    let second = PackageManifest::load_bundled()?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn loaded_manifest_passes_contract_validation() -> Result<()> {
    init_tracing();
    let manifest = PackageManifest::load_bundled()?;
    manifest.validate().map_err(anyhow::Error::msg)?;

    Ok(())
}

#[test]
fn workflow_definitions_are_self_contained_json_documents() -> Result<()> {
    init_tracing();
    let manifest = PackageManifest::load_bundled()?;

    // Content is opaque to the manifest, but each bundled definition is an
    // n8n export and therefore a JSON object with nodes and connections.
    for (key, asset) in &manifest.workflows {
        let definition = asset
            .definition
            .as_object()
            .unwrap_or_else(|| panic!("workflow {} is not a JSON object", key.as_str()));
        assert!(definition.contains_key("nodes"), "{} has no nodes", key.as_str());
        assert!(
            definition.contains_key("connections"),
            "{} has no connections",
            key.as_str()
        );
    }

    Ok(())
}
