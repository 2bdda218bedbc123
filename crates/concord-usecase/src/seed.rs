//! Startup seeding
//!
//! Runs once when the application starts, before anything reads the
//! store. Only empty collections are filled, so running it again is a
//! no-op.

use chrono::{DateTime, Utc};
use concord_domain::{Record, RecordStore, StoreResult, User, UserRole};
use tracing::info;

/// 2024-01-01T08:00:00Z, the recorded last sign-in of both default accounts
const SEED_LAST_LOGIN_SECS: i64 = 1_704_096_000;

/// What a bootstrap run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Collections that were empty and got their defaults
    pub seeded: Vec<&'static str>,
}

impl BootstrapReport {
    pub fn is_noop(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// The two accounts every fresh installation starts with
///
/// Ids and timestamps are fixed so that every installation seeds the
/// same records.
pub fn default_users() -> Vec<User> {
    let last_login = DateTime::<Utc>::from_timestamp(SEED_LAST_LOGIN_SECS, 0).unwrap_or_default();

    vec![
        User::new(
            "admin",
            "Quản trị viên",
            "admin@concord.local",
            UserRole::Admin,
        )
        .with_id("1")
        .with_last_login(last_login),
        User::new("user", "Nguyễn Văn An", "user@concord.local", UserRole::User)
            .with_id("2")
            .with_last_login(last_login),
    ]
}

/// Seed every collection that ships with default content
pub fn bootstrap(store: &mut RecordStore) -> StoreResult<BootstrapReport> {
    let mut report = BootstrapReport::default();

    if store.collection::<User>().seed_if_empty(default_users())? {
        report.seeded.push(User::COLLECTION);
    }

    if report.is_noop() {
        info!("Store already initialized");
    } else {
        info!(collections = ?report.seeded, "Seeded default data");
    }
    Ok(report)
}
