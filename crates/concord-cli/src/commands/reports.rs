//! concord dashboard / report

use chrono::{Local, NaiveDate};
use clap::Args;
use concord_usecase::{contract_report, dashboard_summary, EXPIRY_WINDOW_DAYS};
use console::style;

use super::Context;

#[derive(Debug, Args)]
pub struct DashboardCommand {
    /// Reference date for expiry (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl DashboardCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let summary = dashboard_summary(&mut ctx.store, today)?;

        if ctx.output.is_json() {
            return ctx.output.value(&summary);
        }

        println!("{}", style("Dashboard").bold().underlined());
        println!("  Users      {} ({} active)", summary.users, summary.active_users);
        println!("  Contracts  {}", summary.contracts);
        for (status, count) in &summary.contracts_by_status {
            println!("    {:<11}{}", status.as_str(), count);
        }
        println!("  Works      {}", summary.works);
        println!("  Partners   {}", summary.partners);
        println!("  Channels   {}", summary.channels);
        if summary.expiring_soon > 0 {
            println!(
                "  {}",
                style(format!(
                    "{} active contract(s) end within {} days",
                    summary.expiring_soon, EXPIRY_WINDOW_DAYS
                ))
                .yellow()
            );
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ReportCommand {}

impl ReportCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let report = contract_report(&mut ctx.store)?;

        if ctx.output.is_json() {
            return ctx.output.value(&report);
        }

        for row in &report.rows {
            println!(
                "{:<14} {:<11} {:<28} {:<24} {}",
                style(&row.code).bold(),
                row.status.as_str(),
                row.title,
                row.partner.as_deref().unwrap_or("-"),
                row.value.map(|v| format!("{v:.2}")).unwrap_or_default(),
            );
        }
        println!(
            "{} contract(s), active value {:.2}",
            report.rows.len(),
            report.active_value
        );
        if report.unresolved_partners > 0 {
            ctx.output.warn(&format!(
                "{} contract(s) reference a partner that no longer exists",
                report.unresolved_partners
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::context;
    use concord_domain::{Contract, ContractStatus};

    #[test]
    fn test_dashboard_and_report_run() {
        let mut ctx = context();
        ctx.store
            .collection::<Contract>()
            .create(Contract::new("HD-1", "Deal").with_status(ContractStatus::Active))
            .unwrap();

        DashboardCommand {
            today: NaiveDate::from_ymd_opt(2024, 6, 1),
        }
        .run(&mut ctx)
        .unwrap();
        ReportCommand {}.run(&mut ctx).unwrap();
    }
}
