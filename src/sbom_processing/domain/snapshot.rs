use indexmap::IndexMap;
use serde::Serialize;

/// Snapshot schema version expected by the dependency submission API
pub const SNAPSHOT_VERSION: u32 = 0;

/// Where and for what a snapshot is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    /// `owner/name` of the repository receiving the snapshot
    pub repository: String,
    pub run_id: String,
    pub sha: String,
    /// Fully qualified git ref, e.g. `refs/heads/main`
    pub git_ref: String,
}

impl SubmissionContext {
    pub fn new(repository: String, run_id: String, sha: String, git_ref: String) -> Self {
        Self {
            repository,
            run_id,
            sha,
            git_ref,
        }
    }

    /// API path the snapshot is posted to
    pub fn snapshot_endpoint(&self) -> String {
        format!("repos/{}/dependency-graph/snapshots", self.repository)
    }
}

/// Dependency graph snapshot payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencySnapshot {
    pub version: u32,
    pub job: Job,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub scanned: String,
    pub detector: Detector,
    pub manifests: IndexMap<String, Manifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub correlator: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detector {
    pub name: String,
    pub version: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub file: ManifestFile,
    pub resolved: IndexMap<String, ResolvedDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestFile {
    pub source_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDependency {
    pub package_url: String,
    pub relationship: DependencyRelationship,
}

impl ResolvedDependency {
    pub fn direct(package_url: &str) -> Self {
        Self {
            package_url: package_url.to_string(),
            relationship: DependencyRelationship::Direct,
        }
    }
}

/// Only `direct` is produced; SBOM relationships are not walked for transitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyRelationship {
    Direct,
}
