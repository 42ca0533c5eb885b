mod file_pattern;
mod metadata_generator;
mod sbom_merger;
mod snapshot_builder;

pub use file_pattern::{FilePattern, DEFAULT_SBOM_PATTERN};
pub use metadata_generator::{utc_timestamp, MetadataGenerator, TOOL_NAME};
pub use sbom_merger::{MergeStats, MergedContent, SbomMerger};
pub use snapshot_builder::{
    SnapshotBuilder, DEFAULT_SOURCE_LOCATION_TEMPLATE, SERVICE_PLACEHOLDER,
};
