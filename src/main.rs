mod cli;

use cli::{Args, Command, MergeArgs, SubmitArgs};
use sbom_ci::application::dto::{MergeRequest, MergeSummary, SubmitRequest};
use sbom_ci::config::{discover_config, load_config_from_path, ConfigFile, MergeConfig, SubmitConfig};
use sbom_ci::prelude::*;
use sbom_ci::sbom_processing::services::DEFAULT_SOURCE_LOCATION_TEMPLATE;
use sbom_ci::shared::error::ExitCode;
use std::path::{Path, PathBuf};
use std::process;

/// Merged SBOM location when neither the CLI nor the config names one
const DEFAULT_OUTPUT_PATH: &str = "merged-sbom.spdx.json";

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Merge(merge_args) => run_merge(merge_args, config.merge),
        Command::Submit(submit_args) => run_submit(submit_args, config.submit),
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn run_merge(args: MergeArgs, config: Option<MergeConfig>) -> Result<()> {
    let (request, output_path) = resolve_merge_settings(args, config.unwrap_or_default())?;

    // Create adapters (Dependency Injection)
    let use_case = MergeSbomsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    // Nothing merged: leave no output file behind
    let Some(document) = response.document else {
        return Ok(());
    };

    let output = JsonFormatter::new().format(&document)?;
    let writer = FileSystemWriter::new(output_path);
    writer.present(&output)?;

    let reporter = StderrProgressReporter::new();
    reporter.report_completion(&format!(
        "✅ Merged SBOM written to: {}",
        writer.output_path().display()
    ));
    report_summary(&reporter, &response.summary);

    Ok(())
}

/// CLI flags win over config values, config values over built-in defaults.
fn resolve_merge_settings(args: MergeArgs, config: MergeConfig) -> Result<(MergeRequest, PathBuf)> {
    let input_dir = args
        .input_dir
        .or(config.input_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let pattern = match args.pattern.or(config.pattern) {
        Some(pattern) => FilePattern::new(&pattern)?,
        None => FilePattern::default(),
    };
    let output_path = args
        .output
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    let mut request = MergeRequest::new(input_dir, pattern).with_output_path(output_path.clone());
    if let Some(document_name) = args.document_name.or(config.document_name) {
        request = request.with_document_name(document_name);
    }
    if let Some(namespace_base) = config.namespace_base {
        request = request.with_namespace_base(namespace_base);
    }
    if let Some(creators) = config.creators {
        request = request.with_extra_creators(creators);
    }

    Ok((request, output_path))
}

fn report_summary(reporter: &impl ProgressReporter, summary: &MergeSummary) {
    let stats = &summary.stats;
    reporter.report(&format!(
        "   - Documents merged: {}/{}",
        summary.documents_merged, summary.documents_found
    ));
    reporter.report(&format!(
        "   - Packages: {} kept, {} duplicate(s) collapsed",
        stats.packages_retained, stats.duplicates_collapsed
    ));
    reporter.report(&format!(
        "   - Relationships: {} kept, {} self-reference(s) dropped",
        stats.relationships_retained, stats.self_references_dropped
    ));
    if !summary.skipped.is_empty() {
        reporter.report(&format!(
            "   - Skipped documents: {}",
            summary.skipped.len()
        ));
    }
}

fn run_submit(args: SubmitArgs, config: Option<SubmitConfig>) -> Result<()> {
    let request = build_submit_request(args, config.unwrap_or_default());

    let use_case =
        SubmitDependenciesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    let payload = JsonFormatter::new().format(&response.snapshot)?;
    StdoutPresenter::new().present(&payload)?;

    Ok(())
}

fn build_submit_request(args: SubmitArgs, config: SubmitConfig) -> SubmitRequest {
    let context = SubmissionContext::new(args.repository, args.run_id, args.sha, args.git_ref);
    let template = args
        .source_location
        .or(config.source_location_template)
        .unwrap_or_else(|| DEFAULT_SOURCE_LOCATION_TEMPLATE.to_string());

    SubmitRequest::new(args.sbom, args.service, context)
        .with_source_location_template(template)
        .with_detector_url(args.detector_url.or(config.detector_url))
}
