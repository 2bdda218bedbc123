//! # Concord Use Case Layer
//!
//! Application-specific business rules.
//! Everything here reads and writes through the RecordStore; none of it
//! knows how records are persisted.

pub mod dashboard;
pub mod report;
pub mod seed;
pub mod sign_in;

pub use concord_domain;

pub use dashboard::{dashboard_summary, DashboardSummary, EXPIRY_WINDOW_DAYS};
pub use report::{contract_report, ContractReport, ContractReportRow};
pub use seed::{bootstrap, default_users, BootstrapReport};
pub use sign_in::{sign_in, SignInError};
