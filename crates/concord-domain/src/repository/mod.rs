//! Storage Port - The "Port" side of persistence
//!
//! The store only needs a flat, string-keyed space of string values
//! (the shape of browser local storage). Where those bytes actually live
//! is the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────
//! trait StorageMedium     │  InMemoryMedium
//!   fn read()             │  FileMedium
//!   fn write()            │
//! ```

pub mod storage_medium;
