use crate::sbom_processing::domain::SubmissionContext;
use crate::sbom_processing::services::DEFAULT_SOURCE_LOCATION_TEMPLATE;
use std::path::PathBuf;

/// SubmitRequest - Internal request DTO for the submit use case
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// SBOM document to translate
    pub sbom_path: PathBuf,
    /// Logical service name; keys the manifest
    pub service_name: String,
    pub context: SubmissionContext,
    /// Manifest file location, `{service}` is replaced by the service name
    pub source_location_template: String,
    /// Detector URL; defaults to the repository page
    pub detector_url: Option<String>,
}

impl SubmitRequest {
    pub fn new(sbom_path: PathBuf, service_name: String, context: SubmissionContext) -> Self {
        Self {
            sbom_path,
            service_name,
            context,
            source_location_template: DEFAULT_SOURCE_LOCATION_TEMPLATE.to_string(),
            detector_url: None,
        }
    }

    pub fn with_source_location_template(mut self, template: String) -> Self {
        self.source_location_template = template;
        self
    }

    pub fn with_detector_url(mut self, detector_url: Option<String>) -> Self {
        self.detector_url = detector_url;
        self
    }
}
