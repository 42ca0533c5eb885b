use super::metadata_generator::TOOL_NAME;
use crate::sbom_processing::domain::{
    DependencySnapshot, Detector, Job, Manifest, ManifestFile, ResolvedDependency, SpdxDocument,
    SubmissionContext, SNAPSHOT_VERSION,
};
use indexmap::IndexMap;

/// Placeholder replaced by the service name in source location templates
pub const SERVICE_PLACEHOLDER: &str = "{service}";

/// Manifest file declared for a service unless configured otherwise
pub const DEFAULT_SOURCE_LOCATION_TEMPLATE: &str = "{service}/Dockerfile";

/// SnapshotBuilder service turning an SBOM into a dependency snapshot
///
/// Every package with a package URL becomes one `direct` dependency.
/// Relationships in the SBOM are not consulted.
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Collects resolved dependencies keyed by package URL
    ///
    /// Order follows the package list; a repeated package URL keeps its
    /// first position.
    pub fn resolve_dependencies(document: &SpdxDocument) -> IndexMap<String, ResolvedDependency> {
        let mut resolved = IndexMap::new();
        for purl in document.purls() {
            resolved
                .entry(purl.to_string())
                .or_insert_with(|| ResolvedDependency::direct(purl));
        }
        resolved
    }

    pub fn correlator(service_name: &str) -> String {
        format!("{}-sbom", service_name)
    }

    pub fn source_location(template: &str, service_name: &str) -> String {
        template.replace(SERVICE_PLACEHOLDER, service_name)
    }

    /// Detector URL used when none is configured: the repository page
    pub fn default_detector_url(context: &SubmissionContext) -> String {
        format!("https://github.com/{}", context.repository)
    }

    /// Assembles the snapshot payload for one service manifest
    ///
    /// # Arguments
    /// * `service_name` - Manifest key and job correlator prefix
    /// * `context` - Run, commit and ref the snapshot belongs to
    /// * `source_location` - File the manifest is attributed to
    /// * `detector_url` - URL reported in the detector descriptor
    /// * `resolved` - Output of [`SnapshotBuilder::resolve_dependencies`]
    /// * `scanned` - Scan timestamp
    pub fn build(
        service_name: &str,
        context: &SubmissionContext,
        source_location: String,
        detector_url: String,
        resolved: IndexMap<String, ResolvedDependency>,
        scanned: String,
    ) -> DependencySnapshot {
        let mut manifests = IndexMap::new();
        manifests.insert(
            service_name.to_string(),
            Manifest {
                name: service_name.to_string(),
                file: ManifestFile { source_location },
                resolved,
            },
        );

        DependencySnapshot {
            version: SNAPSHOT_VERSION,
            job: Job {
                correlator: Self::correlator(service_name),
                id: context.run_id.clone(),
            },
            sha: context.sha.clone(),
            git_ref: context.git_ref.clone(),
            scanned,
            detector: Detector {
                name: TOOL_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                url: detector_url,
            },
            manifests,
        }
    }
}
