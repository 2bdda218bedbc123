//! Domain Services
//!
//! The RecordStore and what it is built from.

pub mod collection;
pub mod id_generator;
pub mod record_store;
