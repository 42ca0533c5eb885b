use sbom_ci::prelude::*;
use sbom_ci::shared::error::SbomError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock SbomReader serving in-memory documents
///
/// Documents are keyed by path. `discover_documents` lists every registered
/// path, broken ones included, in registration order.
#[derive(Default)]
pub struct MockSbomReader {
    order: Vec<PathBuf>,
    documents: HashMap<PathBuf, std::result::Result<SpdxDocument, String>>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, document: SpdxDocument) -> Self {
        let path = PathBuf::from(path);
        self.order.push(path.clone());
        self.documents.insert(path, Ok(document));
        self
    }

    pub fn with_json(self, path: &str, json: &str) -> Self {
        let document = serde_json::from_str(json).expect("mock JSON must be a valid SPDX document");
        self.with_document(path, document)
    }

    pub fn with_broken(mut self, path: &str, details: &str) -> Self {
        let path = PathBuf::from(path);
        self.order.push(path.clone());
        self.documents.insert(path, Err(details.to_string()));
        self
    }
}

impl SbomReader for MockSbomReader {
    fn discover_documents(&self, _input_dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
        Ok(self
            .order
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| pattern.matches(name))
            })
            .cloned()
            .collect())
    }

    fn read_document(&self, path: &Path) -> Result<SpdxDocument> {
        match self.documents.get(path) {
            Some(Ok(document)) => Ok(document.clone()),
            Some(Err(details)) => Err(SbomError::SbomParseError {
                path: path.to_path_buf(),
                details: details.clone(),
            }
            .into()),
            None => Err(SbomError::SbomReadError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()),
        }
    }
}
