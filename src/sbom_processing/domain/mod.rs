pub mod document_metadata;
pub mod identity_key;
pub mod snapshot;
pub mod spdx_document;

pub use document_metadata::DocumentMetadata;
pub use identity_key::IdentityKey;
pub use snapshot::{
    DependencyRelationship, DependencySnapshot, Detector, Job, Manifest, ManifestFile,
    ResolvedDependency, SubmissionContext, SNAPSHOT_VERSION,
};
pub use spdx_document::{
    CreationInfo, ExternalRef, IdRemapTable, SpdxDocument, SpdxPackage, SpdxRelationship,
    DATA_LICENSE, DOCUMENT_ROOT_ID, PURL_REFERENCE_TYPE, SPDX_VERSION,
};
