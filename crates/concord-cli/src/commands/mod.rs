//! CLI Commands

pub mod init;
pub mod login;
pub mod records;
pub mod reports;
pub mod seed;

pub use init::InitCommand;
pub use login::LoginCommand;
pub use records::{
    CreateCommand, DeleteCommand, FindCommand, GetCommand, ListCommand, UpdateCommand,
};
pub use reports::{DashboardCommand, ReportCommand};
pub use seed::SeedCommand;

use concord_adapter::InMemoryMedium;
use concord_domain::{MediumError, RecordStore};

use crate::config::ConcordConfig;
use crate::output::Output;

/// Everything a command needs: the opened store and how to print
#[derive(Debug)]
pub struct Context {
    pub config: ConcordConfig,
    pub store: RecordStore,
    pub output: Output,
}

impl Context {
    pub fn open(config: ConcordConfig, output: Output) -> Result<Self, MediumError> {
        let store = config.open_store()?;
        Ok(Self {
            config,
            store,
            output,
        })
    }

    /// Context whose store lives only as long as the process
    pub fn in_memory(config: ConcordConfig, output: Output) -> Self {
        Self {
            config,
            store: RecordStore::new(InMemoryMedium::new()),
            output,
        }
    }
}

/// Whether an error came from the storage medium failing
///
/// Such failures are non-fatal: the store has already switched to
/// memory-only mode.
pub fn is_storage_failure(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<MediumError>())
}
