use crate::sbom_processing::domain::DependencySnapshot;

/// SubmitResponse - Internal response DTO from the submit use case
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub snapshot: DependencySnapshot,
    /// API path the snapshot is meant for
    pub endpoint: String,
}

impl SubmitResponse {
    pub fn new(snapshot: DependencySnapshot, endpoint: String) -> Self {
        Self { snapshot, endpoint }
    }

    /// Number of resolved dependencies across all manifests
    pub fn dependency_count(&self) -> usize {
        self.snapshot
            .manifests
            .values()
            .map(|m| m.resolved.len())
            .sum()
    }
}
