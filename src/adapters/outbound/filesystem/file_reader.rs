use crate::ports::outbound::SbomReader;
use crate::sbom_processing::domain::SpdxDocument;
use crate::sbom_processing::services::FilePattern;
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading SBOM documents from the file system
///
/// Reads go through the shared safety checks: symbolic links are refused,
/// only regular files are read and oversized files are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn discover_documents(&self, input_dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
        if !input_dir.exists() {
            return Ok(Vec::new());
        }

        if !input_dir.is_dir() {
            return Err(SbomError::InvalidInputDirectory {
                path: input_dir.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let entries = fs::read_dir(input_dir).map_err(|e| SbomError::InvalidInputDirectory {
            path: input_dir.to_path_buf(),
            reason: format!("Failed to list directory: {}", e),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SbomError::InvalidInputDirectory {
                path: input_dir.to_path_buf(),
                reason: format!("Failed to read directory entry: {}", e),
            })?;

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !pattern.matches(file_name) {
                continue;
            }

            // Directories never hold a document; links are reported when read.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                paths.push(entry.path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn read_document(&self, path: &Path) -> Result<SpdxDocument> {
        let content =
            read_regular_file(path, "SBOM document").map_err(|e| SbomError::SbomReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL_SBOM: &str = r#"{
  "spdxVersion": "SPDX-2.3",
  "SPDXID": "SPDXRef-DOCUMENT",
  "packages": [
    {
      "SPDXID": "SPDXRef-Package-a",
      "name": "a",
      "versionInfo": "1.0",
      "externalRefs": [
        {"referenceCategory": "PACKAGE-MANAGER", "referenceType": "purl", "referenceLocator": "pkg:npm/a@1.0"}
      ]
    }
  ],
  "relationships": [
    {"spdxElementId": "SPDXRef-DOCUMENT", "relationshipType": "DESCRIBES", "relatedSpdxElement": "SPDXRef-Package-a"}
  ]
}"#;

    #[test]
    fn test_discover_documents_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("worker.spdx.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("api.spdx.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(temp_dir.path().join("nested.spdx.json")).unwrap();

        let reader = FileSystemReader::new();
        let paths = reader
            .discover_documents(temp_dir.path(), &FilePattern::default())
            .unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["api.spdx.json", "worker.spdx.json"]);
    }

    #[test]
    fn test_discover_documents_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let reader = FileSystemReader::new();
        let paths = reader
            .discover_documents(&missing, &FilePattern::default())
            .unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_discover_documents_input_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.spdx.json");
        fs::write(&file_path, "{}").unwrap();

        let reader = FileSystemReader::new();
        let result = reader.discover_documents(&file_path, &FilePattern::default());

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Not a directory"));
    }

    #[test]
    fn test_read_document_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.spdx.json");
        fs::write(&path, MINIMAL_SBOM).unwrap();

        let reader = FileSystemReader::new();
        let document = reader.read_document(&path).unwrap();

        assert_eq!(document.packages.len(), 1);
        assert_eq!(document.packages[0].purl(), Some("pkg:npm/a@1.0"));
        assert_eq!(document.relationships.len(), 1);
    }

    #[test]
    fn test_read_document_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.spdx.json");
        fs::write(&path, "{ not json").unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_document(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse SBOM document"));
    }

    #[test]
    fn test_read_document_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_document(&temp_dir.path().join("missing.spdx.json"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read SBOM document"));
    }
}
