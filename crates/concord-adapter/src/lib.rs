//! # Concord Adapter Layer
//!
//! Implementations of the domain's storage port.
//!
//! ## Structure
//!
//! - `medium/in_memory` - Process-local key space, shared between clones
//! - `medium/file` - One JSON file per key under a data directory

pub mod medium;

pub use medium::file::FileMedium;
pub use medium::in_memory::InMemoryMedium;
