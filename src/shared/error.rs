use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - including a merge run that found no input documents
    Success = 0,
    /// The SBOM given to `submit` carries no package URLs
    NoResolvablePackages = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, invalid config, output write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that aborted the run
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SbomError>() {
            Some(SbomError::NoResolvablePackages { .. }) => ExitCode::NoResolvablePackages,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoResolvablePackages => write!(f, "No Resolvable Packages (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM merging and submission.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint lines next to the failure they explain.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to read SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is an SPDX 2.3 JSON document")]
    SbomParseError { path: PathBuf, details: String },

    #[error("No package URLs found in SBOM: {path}\n\n💡 Hint: Only packages with a 'purl' external reference can be submitted to the dependency graph")]
    NoResolvablePackages { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory that holds the SBOM documents with --input-dir")]
    InvalidInputDirectory { path: PathBuf, reason: String },

    /// Validation error for patterns, templates and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
