//! # Concord Domain Layer
//!
//! The record model and the store every console feature goes through.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Record model & entities                       ││
//! │  │  repository/- Storage port (not implementations)            ││
//! │  │  service/   - RecordStore, typed Collection, id generators  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Users, contracts, works, partners and channels all live in named
//! collections inside one [`RecordStore`]. The store decides identities,
//! persists every mutation through a [`StorageMedium`] before returning,
//! and rehydrates from that medium on the next start.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};

pub use model::{
    channel::Channel,
    contract::{Contract, ContractStatus},
    partner::Partner,
    record::{Document, Record, RecordId},
    user::{User, UserRole, UserStatus},
    work::Work,
};

pub use repository::storage_medium::{MediumError, StorageMedium};

pub use service::{
    collection::Collection,
    id_generator::{IdGenerator, SequentialIds, UuidIds},
    record_store::{RecordStore, DEFAULT_KEY_PREFIX},
};
