/// Load-time error taxonomy for the package manifest
///
/// The manifest is all-or-nothing: any missing or malformed asset makes the
/// whole load fail. There is no retry, no fallback, and no partial manifest.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    /// A declared asset path does not resolve to an existing file
    #[error("asset not found: {key} ({})", .path.display())]
    AssetNotFound { key: String, path: PathBuf },

    /// A workflow definition file exists but is not valid JSON
    #[error("malformed workflow definition: {key} ({}): {source}", .path.display())]
    MalformedAsset {
        key: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other filesystem failure while reading an asset
    #[error("failed to read asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ManifestError>;
