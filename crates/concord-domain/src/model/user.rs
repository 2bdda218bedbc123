//! User - An account that can sign in to the console

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Document, Record, RecordId};

/// What a user is allowed to manage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

/// Whether the account may sign in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Fields written by other parts of the console
    #[serde(flatten)]
    pub extra: Document,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: RecordId::default(),
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            last_login: None,
            extra: Document::new(),
        }
    }

    /// Builder: set a fixed identity (used for seed data)
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the last sign-in time
    pub fn with_last_login(mut self, at: DateTime<Utc>) -> Self {
        self.last_login = Some(at);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format_is_camel_case() {
        let user = User::new("admin", "Administrator", "admin@example.org", UserRole::Admin)
            .with_id("1");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["fullName"], "Administrator");
        assert_eq!(value["role"], "admin");
        assert_eq!(value["status"], "active");
        assert!(value.get("lastLogin").is_none());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let user: User = serde_json::from_value(json!({
            "id": "7",
            "username": "linh",
            "role": "user",
            "status": "inactive",
            "department": "Legal"
        }))
        .unwrap();

        assert!(!user.is_active());
        assert_eq!(user.extra["department"], "Legal");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["department"], "Legal");
    }
}
