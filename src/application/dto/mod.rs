/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod merge_request;
mod merge_response;
mod submit_request;
mod submit_response;

pub use merge_request::MergeRequest;
pub use merge_response::{MergeResponse, MergeSummary, SkippedDocument};
pub use submit_request::SubmitRequest;
pub use submit_response::SubmitResponse;
