use crate::application::dto::{SubmitRequest, SubmitResponse};
use crate::ports::outbound::{ProgressReporter, SbomReader};
use crate::sbom_processing::services::{utc_timestamp, SnapshotBuilder, SERVICE_PLACEHOLDER};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// SubmitDependenciesUseCase - Builds a dependency snapshot from one SBOM
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `PR` - ProgressReporter implementation
pub struct SubmitDependenciesUseCase<R, PR> {
    sbom_reader: R,
    progress_reporter: PR,
}

impl<R, PR> SubmitDependenciesUseCase<R, PR>
where
    R: SbomReader,
    PR: ProgressReporter,
{
    /// Creates a new SubmitDependenciesUseCase with injected dependencies
    pub fn new(sbom_reader: R, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            progress_reporter,
        }
    }

    /// Executes the submit use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - The service name or source location template is invalid
    /// - The SBOM cannot be read or parsed
    /// - No package in the SBOM carries a package URL
    ///   ([`SbomError::NoResolvablePackages`])
    pub fn execute(&self, request: SubmitRequest) -> Result<SubmitResponse> {
        validate_request(&request)?;

        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));
        let document = self.sbom_reader.read_document(&request.sbom_path)?;

        let resolved = SnapshotBuilder::resolve_dependencies(&document);
        if resolved.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No packages with a package URL found in {}. No snapshot was produced.",
                request.sbom_path.display()
            ));
            return Err(SbomError::NoResolvablePackages {
                path: request.sbom_path,
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "✅ Resolved {} dependency(ies) for service '{}'",
            resolved.len(),
            request.service_name
        ));

        let detector_url = request
            .detector_url
            .clone()
            .unwrap_or_else(|| SnapshotBuilder::default_detector_url(&request.context));
        let source_location =
            SnapshotBuilder::source_location(&request.source_location_template, &request.service_name);

        let snapshot = SnapshotBuilder::build(
            &request.service_name,
            &request.context,
            source_location,
            detector_url,
            resolved,
            utc_timestamp(),
        );

        let endpoint = request.context.snapshot_endpoint();
        self.progress_reporter
            .report(&format!("📤 Snapshot target: {}", endpoint));

        Ok(SubmitResponse::new(snapshot, endpoint))
    }
}

fn validate_request(request: &SubmitRequest) -> Result<()> {
    if request.service_name.trim().is_empty() {
        return Err(SbomError::Validation {
            message: "Service name cannot be empty".to_string(),
        }
        .into());
    }

    if !request.source_location_template.contains(SERVICE_PLACEHOLDER) {
        return Err(SbomError::Validation {
            message: format!(
                "Source location template '{}' must contain the {} placeholder",
                request.source_location_template, SERVICE_PLACEHOLDER
            ),
        }
        .into());
    }

    Ok(())
}
