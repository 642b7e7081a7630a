/// Eager asset loading and manifest composition
///
/// Composes the package manifest in a single synchronous pass: every
/// workflow definition is read and parsed up front, and the schema and
/// documentation paths are checked for existence. Any missing or malformed
/// asset fails the whole load immediately (fail-fast, all-or-nothing).

use crate::config::PackageConfig;
use crate::error::{ManifestError, Result};
use crate::manifest::types::{
    DocumentKey, PackageManifest, PackageMetadata, WorkflowAsset, WorkflowKey,
    PACKAGE_DESCRIPTION, PACKAGE_NAME, PACKAGE_VERSION, SCHEMA_PATH,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the manifest with asset paths resolved against `package_root`
///
/// This is the one operation of the crate. It performs the only observable
/// side effect the package has: reading the bundled asset files once, at
/// load time. Repeated loads against the same bundle yield field-by-field
/// equal records.
pub fn load(package_root: &Path) -> Result<PackageManifest> {
    let mut workflows = BTreeMap::new();
    for key in WorkflowKey::ALL {
        workflows.insert(key, load_workflow(package_root, key)?);
    }

    // Schema and documentation are existence-checked only; their contents
    // belong to migration tooling and humans respectively.
    let schema = PathBuf::from(SCHEMA_PATH);
    require_asset(package_root, &schema, "schema")?;

    let mut documentation = BTreeMap::new();
    for key in DocumentKey::ALL {
        let path = PathBuf::from(key.bundled_path());
        require_asset(
            package_root,
            &path,
            &format!("documentation.{}", key.as_str()),
        )?;
        documentation.insert(key, path);
    }

    let manifest = PackageManifest {
        name: PACKAGE_NAME.to_string(),
        version: PACKAGE_VERSION.to_string(),
        description: PACKAGE_DESCRIPTION.to_string(),
        workflows,
        schema,
        documentation,
        metadata: PackageMetadata::default(),
    };

    info!(
        "Loaded package manifest: {} v{} ({} workflows)",
        manifest.name,
        manifest.version,
        manifest.workflows.len()
    );

    Ok(manifest)
}

/// Load the manifest from the bundle shipped in the crate's own source tree
pub fn load_bundled() -> Result<PackageManifest> {
    load(&PackageConfig::bundled().package_root)
}

impl PackageManifest {
    /// Load the manifest against an explicit package root
    pub fn load(package_root: &Path) -> Result<Self> {
        load(package_root)
    }

    /// Load the manifest from the crate's own bundled assets
    pub fn load_bundled() -> Result<Self> {
        load_bundled()
    }
}

/// Read and parse a single workflow definition file
///
/// A missing file surfaces as AssetNotFound, invalid JSON as MalformedAsset.
/// The parsed value is stored as-is; node semantics are the n8n host's job.
fn load_workflow(package_root: &Path, key: WorkflowKey) -> Result<WorkflowAsset> {
    let path = PathBuf::from(key.bundled_path());
    let full_path = package_root.join(&path);
    let asset_key = format!("workflows.{}", key.as_str());

    let raw = fs::read_to_string(&full_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ManifestError::AssetNotFound {
                key: asset_key.clone(),
                path: full_path.clone(),
            }
        } else {
            ManifestError::Io {
                path: full_path.clone(),
                source: e,
            }
        }
    })?;

    let definition: Value =
        serde_json::from_str(&raw).map_err(|e| ManifestError::MalformedAsset {
            key: asset_key.clone(),
            path: full_path.clone(),
            source: e,
        })?;

    debug!("Loaded workflow definition: {} ({} bytes)", asset_key, raw.len());

    Ok(WorkflowAsset { path, definition })
}

/// Require that a declared asset exists as a readable regular file
fn require_asset(package_root: &Path, path: &Path, key: &str) -> Result<()> {
    let full_path = package_root.join(path);

    let metadata = fs::metadata(&full_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ManifestError::AssetNotFound {
                key: key.to_string(),
                path: full_path.clone(),
            }
        } else {
            ManifestError::Io {
                path: full_path.clone(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(ManifestError::AssetNotFound {
            key: key.to_string(),
            path: full_path,
        });
    }

    debug!("Resolved asset: {} ({} bytes)", key, metadata.len());

    Ok(())
}
