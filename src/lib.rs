/// n8n-nodes-brainsait: packaging manifest for the BrainSAIT workflow bundle
///
/// This library exposes a single immutable record — the package manifest —
/// describing the bundled n8n workflow definitions, the SQL schema, and the
/// documentation files that ship with this package. Workflow JSON content is
/// opaque here: it is loaded eagerly for fail-fast validation of the bundle,
/// but interpreted solely by the external n8n orchestration host.

// Package-root configuration and bundle location
pub mod config;

// Load-time error taxonomy (asset-not-found, malformed-asset)
pub mod error;

// Manifest layer - manifest record types and eager asset loading
pub mod manifest;

// Re-export commonly used types for external consumers
pub use config::PackageConfig;
pub use error::ManifestError;
pub use manifest::{
    DocumentKey, PackageManifest, PackageMetadata, WorkflowAsset, WorkflowKey,
};
