//! Sign-in: resolve an account and stamp its last login
//!
//! Credentials are checked by the presentation layer; this only decides
//! whether the named account exists and may enter.

use chrono::{DateTime, Utc};
use concord_domain::{RecordStore, StoreError, User};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error("Account '{0}' is inactive")]
    Inactive(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LastLoginPatch {
    last_login: DateTime<Utc>,
}

/// Sign `username` in at `at`
///
/// Usernames match case-insensitively. If the medium fails while the
/// login time is being recorded, the store is already running from memory
/// and the stamp is applied there instead of failing the sign-in.
pub fn sign_in(
    store: &mut RecordStore,
    username: &str,
    at: DateTime<Utc>,
) -> Result<User, SignInError> {
    let wanted = username.trim().to_lowercase();
    let mut users = store.collection::<User>();

    let user = users
        .all_valid()?
        .into_iter()
        .find(|u| u.username.to_lowercase() == wanted)
        .ok_or_else(|| SignInError::UnknownUser(username.to_string()))?;

    if !user.is_active() {
        warn!(username = %user.username, "Sign-in refused for inactive account");
        return Err(SignInError::Inactive(user.username));
    }

    let patch = LastLoginPatch { last_login: at };
    let signed_in = match users.update(&user.id, &patch) {
        Ok(updated) => updated,
        Err(err) if err.is_storage_failure() => {
            warn!(error = %err, "Could not persist last login");
            users.update(&user.id, &patch)?
        }
        Err(err) => return Err(err.into()),
    };

    info!(username = %signed_in.username, role = %signed_in.role, "Signed in");
    Ok(signed_in)
}
