use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Placeholder commit used when GITHUB_SHA is not set
pub const PLACEHOLDER_SHA: &str = "0000000000000000000000000000000000000000";

/// Merge SPDX SBOMs and build dependency-submission snapshots in CI
#[derive(Parser, Debug)]
#[command(name = "sbom-ci")]
#[command(version)]
#[command(about = "Merge SPDX SBOMs and build dependency-submission snapshots in CI", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./sbom-ci.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge SPDX JSON documents from a directory into one deduplicated SBOM
    Merge(MergeArgs),
    /// Print a dependency snapshot payload built from one SPDX JSON document
    Submit(SubmitArgs),
}

#[derive(ClapArgs, Debug)]
pub struct MergeArgs {
    /// Directory containing the SBOM documents [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// File name pattern selecting the documents (supports wildcards: *) [default: *.spdx.json]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Output file path for the merged SBOM [default: merged-sbom.spdx.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// `name` of the merged document [default: merged-sbom]
    #[arg(long)]
    pub document_name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SubmitArgs {
    /// SPDX JSON document to translate
    #[arg(short, long, value_name = "PATH")]
    pub sbom: PathBuf,

    /// Service name used as manifest key and job correlator
    #[arg(short = 'n', long)]
    pub service: String,

    /// Repository receiving the snapshot (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "unknown/unknown")]
    pub repository: String,

    /// Workflow run identifier
    #[arg(long, env = "GITHUB_RUN_ID", default_value = "0")]
    pub run_id: String,

    /// Commit SHA the snapshot describes
    #[arg(long, env = "GITHUB_SHA", default_value = PLACEHOLDER_SHA)]
    pub sha: String,

    /// Git ref the snapshot describes
    #[arg(long = "ref", env = "GITHUB_REF", default_value = "refs/heads/main")]
    pub git_ref: String,

    /// Manifest file location; {service} is replaced by the service name [default: {service}/Dockerfile]
    #[arg(long, value_name = "TEMPLATE")]
    pub source_location: Option<String>,

    /// Detector URL reported in the payload [default: https://github.com/<repository>]
    #[arg(long)]
    pub detector_url: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults() {
        let args = Args::try_parse_from(["sbom-ci", "merge"]).unwrap();
        let Command::Merge(merge) = args.command else {
            panic!("expected merge subcommand");
        };
        assert!(merge.input_dir.is_none());
        assert!(merge.pattern.is_none());
        assert!(merge.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_merge_flags() {
        let args = Args::try_parse_from([
            "sbom-ci",
            "merge",
            "-i",
            "sboms",
            "-p",
            "sbom-*.json",
            "-o",
            "out/merged.json",
            "--document-name",
            "platform",
            "--config",
            "ci.yml",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
        let Command::Merge(merge) = args.command else {
            panic!("expected merge subcommand");
        };
        assert_eq!(merge.input_dir, Some(PathBuf::from("sboms")));
        assert_eq!(merge.pattern.as_deref(), Some("sbom-*.json"));
        assert_eq!(merge.output, Some(PathBuf::from("out/merged.json")));
        assert_eq!(merge.document_name.as_deref(), Some("platform"));
    }

    #[test]
    fn test_submit_explicit_context() {
        let args = Args::try_parse_from([
            "sbom-ci",
            "submit",
            "--sbom",
            "api.spdx.json",
            "--service",
            "api",
            "--repository",
            "acme/platform",
            "--run-id",
            "77",
            "--sha",
            "abc123",
            "--ref",
            "refs/tags/v1.2.0",
        ])
        .unwrap();

        let Command::Submit(submit) = args.command else {
            panic!("expected submit subcommand");
        };
        assert_eq!(submit.sbom, PathBuf::from("api.spdx.json"));
        assert_eq!(submit.service, "api");
        assert_eq!(submit.repository, "acme/platform");
        assert_eq!(submit.run_id, "77");
        assert_eq!(submit.sha, "abc123");
        assert_eq!(submit.git_ref, "refs/tags/v1.2.0");
        assert!(submit.source_location.is_none());
    }

    #[test]
    fn test_submit_requires_sbom_and_service() {
        assert!(Args::try_parse_from(["sbom-ci", "submit", "--service", "api"]).is_err());
        assert!(Args::try_parse_from(["sbom-ci", "submit", "--sbom", "a.json"]).is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Args::try_parse_from(["sbom-ci"]).is_err());
    }
}
