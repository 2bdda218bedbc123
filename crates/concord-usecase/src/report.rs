//! Contract report: every contract with its partner resolved by id

use std::collections::HashMap;

use concord_domain::{Contract, ContractStatus, Partner, RecordId, RecordStore, StoreResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReportRow {
    pub id: RecordId,
    pub code: String,
    pub title: String,
    /// `None` when the contract has no partner or the partner is gone
    pub partner: Option<String>,
    pub status: ContractStatus,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReport {
    pub rows: Vec<ContractReportRow>,
    /// Sum of the values of active contracts
    pub active_value: f64,
    /// Contracts pointing at a partner id that does not exist
    pub unresolved_partners: usize,
}

pub fn contract_report(store: &mut RecordStore) -> StoreResult<ContractReport> {
    let partners: HashMap<RecordId, String> = store
        .collection::<Partner>()
        .all_valid()?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let contracts = store.collection::<Contract>().all_valid()?;

    let mut unresolved_partners = 0;
    let rows: Vec<ContractReportRow> = contracts
        .iter()
        .map(|contract| {
            let partner = contract.partner_id.as_ref().and_then(|id| {
                let name = partners.get(id).cloned();
                if name.is_none() {
                    unresolved_partners += 1;
                }
                name
            });
            ContractReportRow {
                id: contract.id.clone(),
                code: contract.code.clone(),
                title: contract.title.clone(),
                partner,
                status: contract.status,
                value: contract.value,
            }
        })
        .collect();

    let active_value: f64 = contracts
        .iter()
        .filter(|c| c.is_active())
        .filter_map(|c| c.value)
        .sum();

    Ok(ContractReport {
        rows,
        active_value,
        unresolved_partners,
    })
}
