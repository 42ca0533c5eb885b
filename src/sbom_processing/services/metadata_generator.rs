use crate::sbom_processing::domain::DocumentMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Tool name recorded in creator lists and detector descriptors
pub const TOOL_NAME: &str = "sbom-ci";

/// Current UTC time at second precision with a `Z` suffix
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// MetadataGenerator service for generating merged document metadata
///
/// The metadata never depends on the input documents: every merge gets
/// a new namespace, a new creation time and the tool's own creator entry.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a unique namespace
    ///
    /// # Arguments
    /// * `document_name` - Value of the document `name` field
    /// * `namespace_base` - URI prefix the unique namespace is built under
    /// * `extra_creators` - Creators listed after the tool entry
    pub fn generate_metadata(
        document_name: &str,
        namespace_base: &str,
        extra_creators: &[String],
    ) -> DocumentMetadata {
        let namespace = format!(
            "{}/{}-{}",
            namespace_base.trim_end_matches('/'),
            document_name,
            Uuid::new_v4()
        );

        let mut creators = vec![Self::tool_creator()];
        creators.extend(extra_creators.iter().cloned());

        DocumentMetadata::new(
            document_name.to_string(),
            namespace,
            utc_timestamp(),
            creators,
        )
    }

    /// SPDX creator entry for this tool, using the compile-time version
    pub fn tool_creator() -> String {
        format!("Tool: {}-{}", TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
