use crate::sbom_processing::domain::SpdxDocument;
use crate::sbom_processing::services::MergeStats;
use std::path::PathBuf;

/// A document left out of the merge and why
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome counters for one merge run
#[derive(Debug, Clone, Default)]
pub struct MergeSummary {
    pub documents_found: usize,
    pub documents_merged: usize,
    pub skipped: Vec<SkippedDocument>,
    pub stats: MergeStats,
}

/// MergeResponse - Internal response DTO from the merge use case
///
/// `document` is `None` when nothing could be merged; no output file
/// is written in that case.
#[derive(Debug, Clone)]
pub struct MergeResponse {
    pub document: Option<SpdxDocument>,
    pub summary: MergeSummary,
}

impl MergeResponse {
    pub fn new(document: Option<SpdxDocument>, summary: MergeSummary) -> Self {
        Self { document, summary }
    }
}
