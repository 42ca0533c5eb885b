use crate::sbom_processing::services::FilePattern;
use std::path::PathBuf;

/// Document name used for merged SBOMs unless configured
pub const DEFAULT_DOCUMENT_NAME: &str = "merged-sbom";

/// Namespace prefix used for merged SBOMs unless configured
pub const DEFAULT_NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

/// MergeRequest - Internal request DTO for the merge use case
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Directory searched for SBOM documents (not recursive)
    pub input_dir: PathBuf,
    /// File name pattern selecting the documents
    pub pattern: FilePattern,
    /// `name` of the merged document
    pub document_name: String,
    /// URI prefix for the merged document namespace
    pub namespace_base: String,
    /// Creators listed after the tool entry
    pub extra_creators: Vec<String>,
    /// Where the merged document will be written; never read as an input
    pub output_path: Option<PathBuf>,
}

impl MergeRequest {
    pub fn new(input_dir: PathBuf, pattern: FilePattern) -> Self {
        Self {
            input_dir,
            pattern,
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            namespace_base: DEFAULT_NAMESPACE_BASE.to_string(),
            extra_creators: Vec::new(),
            output_path: None,
        }
    }

    pub fn with_document_name(mut self, document_name: String) -> Self {
        self.document_name = document_name;
        self
    }

    pub fn with_namespace_base(mut self, namespace_base: String) -> Self {
        self.namespace_base = namespace_base;
        self
    }

    pub fn with_extra_creators(mut self, extra_creators: Vec<String>) -> Self {
        self.extra_creators = extra_creators;
        self
    }

    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_request_defaults() {
        let request = MergeRequest::new(PathBuf::from("sboms"), FilePattern::default());
        assert_eq!(request.document_name, "merged-sbom");
        assert_eq!(request.namespace_base, "https://spdx.org/spdxdocs");
        assert!(request.extra_creators.is_empty());
        assert!(request.output_path.is_none());
    }

    #[test]
    fn test_merge_request_builders() {
        let request = MergeRequest::new(PathBuf::from("sboms"), FilePattern::default())
            .with_document_name("platform".to_string())
            .with_namespace_base("https://sbom.example.org".to_string())
            .with_extra_creators(vec!["Organization: ACME".to_string()])
            .with_output_path(PathBuf::from("merged.spdx.json"));

        assert_eq!(request.document_name, "platform");
        assert_eq!(request.namespace_base, "https://sbom.example.org");
        assert_eq!(request.extra_creators, vec!["Organization: ACME".to_string()]);
        assert_eq!(request.output_path, Some(PathBuf::from("merged.spdx.json")));
    }
}
