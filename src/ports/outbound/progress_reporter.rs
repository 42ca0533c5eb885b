/// ProgressReporter port for reporting progress during operations
///
/// Status lines go to stderr so stdout stays free for the snapshot payload.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a batch of documents
    ///
    /// # Arguments
    /// * `current` - Documents processed so far
    /// * `total` - Documents in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a non-fatal error
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
