/// Manifest layer
///
/// This module defines the package manifest record and the eager, fail-fast
/// loader that composes it. It provides:
/// - Type definitions (PackageManifest, WorkflowKey, DocumentKey)
/// - Eager asset resolution at load time (workflow JSON parsed into memory)
/// - Structural validation of the fixed external contract

// Manifest record type definitions
pub mod types;

// Eager asset loading and manifest composition
pub mod loader;

// Re-export commonly used types
pub use types::{
    DocumentKey, PackageManifest, PackageMetadata, WorkflowAsset, WorkflowKey,
};
