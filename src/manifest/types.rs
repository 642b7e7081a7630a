/// Manifest record type definitions
///
/// Defines the structured record an external package loader receives: package
/// identity, the fixed workflow key set, asset path references, and authoring
/// metadata. The workflow and documentation key sets are fixed at authoring
/// time; they are enums rather than free strings so a manifest with a missing
/// or extra key is unrepresentable once loaded.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Package name as seen by the external registry/loader
pub const PACKAGE_NAME: &str = "n8n-nodes-brainsait";

/// Package semantic version
pub const PACKAGE_VERSION: &str = "1.0.0";

/// Package description
pub const PACKAGE_DESCRIPTION: &str = "BrainSAIT Healthcare AI Agents - \
    HIPAA/NPHIES compliant N8N workflow nodes for Saudi Arabian healthcare";

/// Relative path of the bundled SQL schema
pub const SCHEMA_PATH: &str = "schema.sql";

/// Logical keys of the bundled workflow definitions
///
/// Exactly these five workflows ship with the package. The serialized form
/// uses the camelCase names the external loader contract expects
/// (e.g. "patientPortal").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkflowKey {
    /// MASTERLINC orchestrator - routes incoming requests to agent workflows
    Masterlinc,
    /// TTLINC - Arabic/English medical translation pipeline
    Ttlinc,
    /// Patient portal demo flow
    PatientPortal,
    /// Periodic system health check
    SystemHealth,
    /// TERRY system monitor - metrics collection
    TerryMonitor,
}

impl WorkflowKey {
    /// All workflow keys, in manifest order
    pub const ALL: [WorkflowKey; 5] = [
        WorkflowKey::Masterlinc,
        WorkflowKey::Ttlinc,
        WorkflowKey::PatientPortal,
        WorkflowKey::SystemHealth,
        WorkflowKey::TerryMonitor,
    ];

    /// Logical key string as seen by the external loader
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowKey::Masterlinc => "masterlinc",
            WorkflowKey::Ttlinc => "ttlinc",
            WorkflowKey::PatientPortal => "patientPortal",
            WorkflowKey::SystemHealth => "systemHealth",
            WorkflowKey::TerryMonitor => "terryMonitor",
        }
    }

    /// Relative path of the workflow definition file bundled for this key
    pub fn bundled_path(self) -> &'static str {
        match self {
            WorkflowKey::Masterlinc => "workflows/01-masterlinc-orchestrator.json",
            WorkflowKey::Ttlinc => "workflows/02-ttlinc-translation.json",
            WorkflowKey::PatientPortal => "workflows/03-patient-portal-demo.json",
            WorkflowKey::SystemHealth => "workflows/04-system-health-check.json",
            WorkflowKey::TerryMonitor => "workflows/05-terry-system-monitor.json",
        }
    }
}

/// Logical keys of the bundled documentation files
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKey {
    Readme,
    Deployment,
    Contributing,
    Changelog,
    /// TERRY monitoring integration guide
    Terry,
}

impl DocumentKey {
    /// All documentation keys, in manifest order
    pub const ALL: [DocumentKey; 5] = [
        DocumentKey::Readme,
        DocumentKey::Deployment,
        DocumentKey::Contributing,
        DocumentKey::Changelog,
        DocumentKey::Terry,
    ];

    /// Logical key string as seen by the external loader
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKey::Readme => "readme",
            DocumentKey::Deployment => "deployment",
            DocumentKey::Contributing => "contributing",
            DocumentKey::Changelog => "changelog",
            DocumentKey::Terry => "terry",
        }
    }

    /// Relative path of the documentation file bundled for this key
    pub fn bundled_path(self) -> &'static str {
        match self {
            DocumentKey::Readme => "README.md",
            DocumentKey::Deployment => "DEPLOYMENT_GUIDE.md",
            DocumentKey::Contributing => "CONTRIBUTING.md",
            DocumentKey::Changelog => "CHANGELOG.md",
            DocumentKey::Terry => "TERRY_INTEGRATION_GUIDE.md",
        }
    }
}

/// A single bundled workflow definition
///
/// Carries the relative path reference plus the eagerly-parsed JSON content.
/// The content is opaque to this crate: parsing proves the file is valid
/// JSON, nothing more. Interpretation belongs to the n8n host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowAsset {
    /// Path relative to the package root
    pub path: PathBuf,
    /// Parsed workflow definition (opaque, host-interpreted)
    pub definition: Value,
}

/// Fixed authoring metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub author: String,
    pub email: String,
    pub website: String,
    pub github: String,
    pub license: String,
}

impl Default for PackageMetadata {
    /// The authoring metadata is fixed at package-build time
    fn default() -> Self {
        Self {
            author: "Dr. Mohamed El Fadil".to_string(),
            email: "fadil@brainsait.com".to_string(),
            website: "https://brainsait.com".to_string(),
            github: "https://github.com/Fadil369/n8n-nodes-brainsait".to_string(),
            license: "MIT".to_string(),
        }
    }
}

/// The package manifest
///
/// One immutable structured record describing the package identity and the
/// locations of its bundled assets. Constructed once by the loader and passed
/// by value to consumers; it has no mutators and never changes afterwards, so
/// concurrent readers need no coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Unique package identifier (registry identity together with `version`)
    pub name: String,
    /// Semantic version string
    pub version: String,
    /// Free-text package description
    pub description: String,
    /// Bundled workflow definitions, keyed by logical workflow key
    pub workflows: BTreeMap<WorkflowKey, WorkflowAsset>,
    /// Relative path of the SQL schema (opaque, migration-tooling territory)
    pub schema: PathBuf,
    /// Bundled documentation files, keyed by logical document key
    pub documentation: BTreeMap<DocumentKey, PathBuf>,
    /// Fixed authoring metadata
    pub metadata: PackageMetadata,
}

impl PackageManifest {
    /// Validate the manifest against the fixed external contract
    ///
    /// The loader composes manifests from the fixed key enums, so a manifest
    /// it returns always passes. Deserialized manifests from elsewhere may
    /// not, which is what this check is for.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Package name cannot be empty".to_string());
        }

        if self.version.is_empty() {
            return Err("Package version cannot be empty".to_string());
        }

        for key in WorkflowKey::ALL {
            if !self.workflows.contains_key(&key) {
                return Err(format!("Missing workflow entry: {}", key.as_str()));
            }
        }
        if self.workflows.len() != WorkflowKey::ALL.len() {
            return Err(format!(
                "Expected exactly {} workflow entries, found {}",
                WorkflowKey::ALL.len(),
                self.workflows.len()
            ));
        }

        for key in DocumentKey::ALL {
            if !self.documentation.contains_key(&key) {
                return Err(format!("Missing documentation entry: {}", key.as_str()));
            }
        }

        if self.metadata.license != "MIT" {
            return Err(format!(
                "Unexpected license identifier: {}",
                self.metadata.license
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_keys_serialize_to_contract_strings() {
        for key in WorkflowKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn document_keys_serialize_to_contract_strings() {
        for key in DocumentKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn workflow_keys_are_exactly_five() {
        assert_eq!(WorkflowKey::ALL.len(), 5);
        let strings: Vec<&str> = WorkflowKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            strings,
            vec![
                "masterlinc",
                "ttlinc",
                "patientPortal",
                "systemHealth",
                "terryMonitor"
            ]
        );
    }

    #[test]
    fn validate_rejects_missing_workflow_entry() {
        let manifest = crate::manifest::loader::load_bundled().unwrap();
        let mut broken = manifest.clone();
        broken.workflows.remove(&WorkflowKey::Masterlinc);
        assert!(manifest.validate().is_ok());
        let err = broken.validate().unwrap_err();
        assert!(err.contains("masterlinc"), "unexpected error: {err}");
    }

    #[test]
    fn validate_rejects_wrong_license() {
        let mut manifest = crate::manifest::loader::load_bundled().unwrap();
        manifest.metadata.license = "GPL-3.0".to_string();
        assert!(manifest.validate().is_err());
    }
}
