//! concord login

use chrono::Utc;
use clap::Args;
use concord_usecase::sign_in;

use super::Context;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Account to sign in
    pub username: String,
}

impl LoginCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let user = sign_in(&mut ctx.store, &self.username, Utc::now())?;

        if ctx.output.is_json() {
            return ctx.output.value(&user);
        }
        ctx.output.success(&format!(
            "Signed in as {} ({}, {})",
            user.username, user.full_name, user.role
        ));
        Ok(())
    }
}
