/// Configuration for locating the workflow package bundle
///
/// The manifest itself holds only relative path references; this module
/// decides which directory those references resolve against.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Package-root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Directory the manifest's relative asset paths resolve against.
    /// All bundled files (workflows/, schema.sql, documentation) live here.
    pub package_root: PathBuf,
}

impl Default for PackageConfig {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            package_root: std::env::var("BRAINSAIT_PACKAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl PackageConfig {
    /// Configuration pointing at the crate's own source tree
    ///
    /// The repository ships the complete bundle, so the crate root is always
    /// a valid package root. Used by `PackageManifest::load_bundled` and the
    /// test suite.
    pub fn bundled() -> Self {
        Self {
            package_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        }
    }
}
