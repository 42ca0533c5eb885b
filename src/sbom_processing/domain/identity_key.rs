use super::SpdxPackage;

/// Deduplication key for a package across SBOM documents
///
/// The package URL when the package has one, `name@version` otherwise.
/// SPDXIDs are scoped to the producing document, so they never take part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn from_package(package: &SpdxPackage) -> Self {
        match package.purl() {
            Some(purl) => Self(purl.to_string()),
            None => Self(format!(
                "{}@{}",
                package.name,
                package.version_info.as_deref().unwrap_or_default()
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
