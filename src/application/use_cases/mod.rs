/// Use cases module containing application business logic orchestration
mod merge_sboms;
mod submit_dependencies;

pub use merge_sboms::MergeSbomsUseCase;
pub use submit_dependencies::SubmitDependenciesUseCase;
