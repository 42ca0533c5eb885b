use crate::shared::error::SbomError;
use crate::shared::Result;

/// Maximum length of a file name pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// Pattern used to find SBOM documents when none is given
pub const DEFAULT_SBOM_PATTERN: &str = "*.spdx.json";

/// FilePattern - Matches file names against a `*` wildcard pattern
///
/// `*` matches zero or more characters. Matching is anchored at both ends
/// and case-sensitive. Patterns apply to file names only, so path separators
/// are rejected.
#[derive(Debug, Clone)]
pub struct FilePattern {
    original: String,
    matcher: PatternMatcher,
}

impl FilePattern {
    /// Creates a new FilePattern from a raw pattern string
    ///
    /// # Errors
    /// - Empty or overlong pattern
    /// - Pattern containing a path separator or control character
    pub fn new(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;

        Ok(Self {
            original: pattern.to_string(),
            matcher: compile_pattern(pattern),
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.matches(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self {
            original: DEFAULT_SBOM_PATTERN.to_string(),
            matcher: compile_pattern(DEFAULT_SBOM_PATTERN),
        }
    }
}

impl std::fmt::Display for FilePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug, Clone)]
enum PatternMatcher {
    /// No wildcard: "sbom.json"
    Exact(String),
    /// Only wildcards: "*"
    Any,
    /// Leading wildcard: "*.spdx.json"
    EndsWith(String),
    /// Trailing wildcard: "sbom-*"
    StartsWith(String),
    /// General case: "sbom-*.spdx.json", "*-api-*.json"
    Segments {
        head: String,
        middle: Vec<String>,
        tail: String,
    },
}

impl PatternMatcher {
    fn matches(&self, file_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => file_name == s,
            PatternMatcher::Any => true,
            PatternMatcher::EndsWith(suffix) => file_name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => file_name.starts_with(prefix.as_str()),
            PatternMatcher::Segments { head, middle, tail } => {
                if file_name.len() < head.len() + tail.len()
                    || !file_name.starts_with(head.as_str())
                    || !file_name.ends_with(tail.as_str())
                {
                    return false;
                }

                // Middle parts must appear in order between head and tail
                let mut rest = &file_name[head.len()..file_name.len() - tail.len()];
                for part in middle {
                    match rest.find(part.as_str()) {
                        Some(pos) => rest = &rest[pos + part.len()..],
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(SbomError::Validation {
            message: "File pattern cannot be empty".to_string(),
        }
        .into());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(SbomError::Validation {
            message: format!(
                "File pattern is too long ({} chars). Maximum: {} chars",
                pattern.len(),
                MAX_PATTERN_LENGTH
            ),
        }
        .into());
    }

    if let Some(ch) = pattern
        .chars()
        .find(|&c| c == '/' || c == '\\' || c.is_control())
    {
        return Err(SbomError::Validation {
            message: format!(
                "File pattern '{}' contains invalid character {:?}. Patterns match file names only; use --input-dir for the directory.",
                pattern, ch
            ),
        }
        .into());
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if pattern.chars().all(|c| c == '*') {
        return PatternMatcher::Any;
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    match parts.as_slice() {
        [exact] => PatternMatcher::Exact(exact.to_string()),
        ["", suffix] => PatternMatcher::EndsWith(suffix.to_string()),
        [prefix, ""] => PatternMatcher::StartsWith(prefix.to_string()),
        [head, middle @ .., tail] => PatternMatcher::Segments {
            head: head.to_string(),
            middle: middle
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            tail: tail.to_string(),
        },
        [] => PatternMatcher::Any,
    }
}
