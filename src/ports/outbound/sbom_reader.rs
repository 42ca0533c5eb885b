use crate::sbom_processing::domain::SpdxDocument;
use crate::sbom_processing::services::FilePattern;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SbomReader port for locating and loading SPDX JSON documents
///
/// This port abstracts the file system so the merge and submit use cases
/// can be driven by in-memory documents in tests.
pub trait SbomReader {
    /// Lists the documents in `input_dir` whose file name matches `pattern`
    ///
    /// # Returns
    /// Matching paths sorted by file name. A missing directory yields an
    /// empty list.
    ///
    /// # Errors
    /// Returns an error if `input_dir` exists but is not a readable directory
    fn discover_documents(&self, input_dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>>;

    /// Reads and parses one SPDX JSON document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read (missing, symlink, too large, permissions)
    /// - The content is not JSON in the SPDX package/relationship shape
    fn read_document(&self, path: &Path) -> Result<SpdxDocument>;
}
