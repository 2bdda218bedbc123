//! Dashboard summary: headline counts across every collection

use std::collections::BTreeMap;

use chrono::NaiveDate;
use concord_domain::{
    Channel, Contract, ContractStatus, Partner, RecordStore, StoreResult, User, Work,
};
use serde::Serialize;

/// Active contracts ending within this many days count as expiring
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub users: usize,
    pub active_users: usize,
    pub contracts: usize,
    pub works: usize,
    pub partners: usize,
    pub channels: usize,
    /// Every status is present, zero when unused
    pub contracts_by_status: BTreeMap<ContractStatus, usize>,
    /// Active contracts whose end date falls in the expiry window
    pub expiring_soon: usize,
}

/// Totals count every stored record; the per-status and expiry figures
/// only see records that read as a [`Contract`].
pub fn dashboard_summary(
    store: &mut RecordStore,
    today: NaiveDate,
) -> StoreResult<DashboardSummary> {
    let users = store.collection::<User>().all_valid()?;
    let contracts = store.collection::<Contract>().all_valid()?;

    let mut contracts_by_status: BTreeMap<ContractStatus, usize> =
        ContractStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for contract in &contracts {
        *contracts_by_status.entry(contract.status).or_default() += 1;
    }

    let expiring_soon = contracts
        .iter()
        .filter(|c| c.is_active())
        .filter_map(|c| c.end_date)
        .filter(|end| {
            let days_left = (*end - today).num_days();
            (0..=EXPIRY_WINDOW_DAYS).contains(&days_left)
        })
        .count();

    Ok(DashboardSummary {
        active_users: users.iter().filter(|u| u.is_active()).count(),
        users: store.collection::<User>().count()?,
        contracts: store.collection::<Contract>().count()?,
        works: store.collection::<Work>().count()?,
        partners: store.collection::<Partner>().count()?,
        channels: store.collection::<Channel>().count()?,
        contracts_by_status,
        expiring_soon,
    })
}
