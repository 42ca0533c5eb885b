use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (merged SBOM file, stdout)
/// where the serialized document or payload ends up.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
