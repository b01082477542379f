//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, api: &str) -> Result<()> {
    let service = super::connect(api)?;

    // Unconditional and idempotent: signing out twice is fine
    service.logout();

    output::success("Signed out");

    Ok(())
}
