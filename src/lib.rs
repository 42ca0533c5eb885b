//! sbom-ci - CI helpers for SPDX SBOMs
//!
//! This library merges SPDX 2.3 JSON documents into one deduplicated SBOM and
//! turns an SBOM into a dependency-submission snapshot, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_processing`): SPDX model, identity keys, merge and snapshot services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_ci::application::dto::MergeRequest;
//! use sbom_ci::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = MergeSbomsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = MergeRequest::new(PathBuf::from("sboms"), FilePattern::default());
//! let response = use_case.execute(request)?;
//!
//! if let Some(document) = response.document {
//!     let output = JsonFormatter::new().format(&document)?;
//!     FileSystemWriter::new(PathBuf::from("merged-sbom.spdx.json")).present(&output)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_processing;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::application::use_cases::{MergeSbomsUseCase, SubmitDependenciesUseCase};
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, SbomReader};
    pub use crate::sbom_processing::domain::{
        DependencySnapshot, IdentityKey, SpdxDocument, SpdxPackage, SpdxRelationship,
        SubmissionContext,
    };
    pub use crate::sbom_processing::services::{FilePattern, SbomMerger, SnapshotBuilder};
    pub use crate::shared::Result;
}
