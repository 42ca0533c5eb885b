/// Domain layer - SPDX model, identity keys and the merge/snapshot services
///
/// Nothing in here touches the file system or the console.
pub mod domain;
pub mod services;
