//! Storage Media - StorageMedium implementations
//!
//! These implement the storage port from concord-domain.

pub mod file;
pub mod in_memory;
