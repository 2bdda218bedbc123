//! Contract - An agreement with a partner covering one or more works
//!
//! The partner and the works are referenced by id only; nothing checks
//! that they exist. Resolving them is up to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Document, Record, RecordId};

/// Lifecycle stage of a contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Active,
    Expired,
    Terminated,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 4] = [
        ContractStatus::Draft,
        ContractStatus::Active,
        ContractStatus::Expired,
        ContractStatus::Terminated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Active => "active",
            ContractStatus::Expired => "expired",
            ContractStatus::Terminated => "terminated",
        }
    }
}

impl core::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(default)]
    pub id: RecordId,
    /// Human-facing contract number
    #[serde(default)]
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<RecordId>,
    #[serde(default)]
    pub status: ContractStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub work_ids: Vec<RecordId>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Contract {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            code: code.into(),
            title: title.into(),
            partner_id: None,
            status: ContractStatus::Draft,
            start_date: None,
            end_date: None,
            value: None,
            work_ids: Vec::new(),
            extra: Document::new(),
        }
    }

    /// Builder: link a partner
    pub fn with_partner(mut self, partner_id: impl Into<RecordId>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the validity period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Builder: set the contract value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Builder: cover a work
    pub fn with_work(mut self, work_id: impl Into<RecordId>) -> Self {
        self.work_ids.push(work_id.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }
}

impl Record for Contract {
    const COLLECTION: &'static str = "contracts";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contract_wire_format() {
        let contract = Contract::new("HD-2024-001", "Distribution rights")
            .with_partner("p-1")
            .with_status(ContractStatus::Active)
            .with_period(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            )
            .with_work("w-1");

        let value = serde_json::to_value(&contract).unwrap();
        assert_eq!(value["partnerId"], "p-1");
        assert_eq!(value["status"], "active");
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["workIds"], json!(["w-1"]));
        assert!(value.get("value").is_none());
    }

    #[test]
    fn test_minimal_contract_defaults() {
        let contract: Contract = serde_json::from_value(json!({"title": "Draft deal"})).unwrap();
        assert!(contract.id.is_unassigned());
        assert_eq!(contract.status, ContractStatus::Draft);
        assert!(contract.work_ids.is_empty());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Contract, _> =
            serde_json::from_value(json!({"title": "x", "status": "archived"}));
        assert!(result.is_err());
    }
}
