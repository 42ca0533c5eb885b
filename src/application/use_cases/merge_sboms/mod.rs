use crate::application::dto::{MergeRequest, MergeResponse, MergeSummary, SkippedDocument};
use crate::ports::outbound::{ProgressReporter, SbomReader};
use crate::sbom_processing::domain::SpdxDocument;
use crate::sbom_processing::services::{MergedContent, MetadataGenerator, SbomMerger};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};


/// MergeSbomsUseCase - Merges every matching SBOM document into one
///
/// Unreadable or malformed documents are reported and skipped; they never
/// abort the batch. When no document could be merged the response carries no
/// document and the caller must not write output.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeSbomsUseCase<R, PR> {
    sbom_reader: R,
    progress_reporter: PR,
}

impl<R, PR> MergeSbomsUseCase<R, PR>
where
    R: SbomReader,
    PR: ProgressReporter,
{
    /// Creates a new MergeSbomsUseCase with injected dependencies
    pub fn new(sbom_reader: R, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            progress_reporter,
        }
    }

    /// Executes the merge use case
    ///
    /// # Errors
    /// Returns an error only if the input directory cannot be listed.
    /// Per-document failures are recorded in the summary instead.
    pub fn execute(&self, request: MergeRequest) -> Result<MergeResponse> {
        // Step 1: Find input documents
        let paths = self.discover_documents(&request)?;
        let mut summary = MergeSummary {
            documents_found: paths.len(),
            ..Default::default()
        };

        if paths.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No SBOM documents matching '{}' found in {}. Nothing to merge.",
                request.pattern,
                request.input_dir.display()
            ));
            return Ok(MergeResponse::new(None, summary));
        }

        // Step 2: Fold documents into the merger, skipping broken ones
        let content = self.merge_documents(&paths, &mut summary);
        summary.stats = content.stats.clone();

        if summary.documents_merged == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: None of the {} SBOM document(s) could be read. No merged document was produced.",
                summary.documents_found
            ));
            return Ok(MergeResponse::new(None, summary));
        }

        self.warn_about_colliding_ids(&content);

        // Step 3: Wrap the merged content in fresh metadata
        let document = self.build_document(&request, content);

        self.progress_reporter.report(&format!(
            "✅ Merged {} package(s) and {} relationship(s) from {} document(s)",
            summary.stats.packages_retained,
            summary.stats.relationships_retained,
            summary.documents_merged
        ));

        Ok(MergeResponse::new(Some(document), summary))
    }

    fn discover_documents(&self, request: &MergeRequest) -> Result<Vec<PathBuf>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching for SBOM documents matching '{}' in: {}",
            request.pattern,
            request.input_dir.display()
        ));

        let mut paths = self
            .sbom_reader
            .discover_documents(&request.input_dir, &request.pattern)?;

        // A previous run's output matches the default pattern; never merge it back in
        if let Some(output_path) = &request.output_path {
            paths.retain(|path| {
                let is_output = is_same_file(path, output_path);
                if is_output {
                    self.progress_reporter.report(&format!(
                        "⏭️  Ignoring output file of a previous run: {}",
                        path.display()
                    ));
                }
                !is_output
            });
        }

        if !paths.is_empty() {
            self.progress_reporter
                .report(&format!("📖 Found {} SBOM document(s)", paths.len()));
        }

        Ok(paths)
    }

    fn merge_documents(&self, paths: &[PathBuf], summary: &mut MergeSummary) -> MergedContent {
        let mut merger = SbomMerger::new();
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            match self.sbom_reader.read_document(path) {
                Ok(document) => {
                    merger.add_document(document);
                    summary.documents_merged += 1;
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping {}: {}",
                        path.display(),
                        e
                    ));
                    summary.skipped.push(SkippedDocument {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&display_name(path)));
        }

        merger.finish()
    }

    fn warn_about_colliding_ids(&self, content: &MergedContent) {
        for spdx_id in &content.stats.colliding_ids {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: SPDXID '{}' is used by more than one distinct package in the merged document.",
                spdx_id
            ));
        }
    }

    fn build_document(&self, request: &MergeRequest, content: MergedContent) -> SpdxDocument {
        let metadata = MetadataGenerator::generate_metadata(
            &request.document_name,
            &request.namespace_base,
            &request.extra_creators,
        );

        SpdxDocument::assemble(&metadata, content.packages, content.relationships)
    }
}

/// Compares canonical paths when both exist, the paths as given otherwise
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
