//! concord seed

use clap::Args;
use concord_usecase::{bootstrap, BootstrapReport};

use super::Context;
use crate::output::Output;

#[derive(Debug, Args)]
pub struct SeedCommand {}

impl SeedCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let report = bootstrap(&mut ctx.store)?;
        print_report(&ctx.output, &report)
    }
}

pub(crate) fn print_report(output: &Output, report: &BootstrapReport) -> anyhow::Result<()> {
    if output.is_json() {
        return output.value(&serde_json::json!({ "seeded": report.seeded }));
    }
    if report.is_noop() {
        output.success("Store already initialized, nothing seeded");
    } else {
        output.success(&format!("Seeded {}", report.seeded.join(", ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::context;

    #[test]
    fn test_seed_twice() {
        let mut ctx = context();
        SeedCommand {}.run(&mut ctx).unwrap();
        SeedCommand {}.run(&mut ctx).unwrap();
        assert_eq!(ctx.store.count("users").unwrap(), 2);
    }
}
