//! Change-password command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tanglome_core::PasswordChange;

use crate::output;

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    /// Current account password
    #[arg(long)]
    pub current_password: String,

    /// New password
    #[arg(long)]
    pub new_password: String,

    /// New password confirmation
    #[arg(long)]
    pub confirm_password: String,
}

pub async fn run(args: ChangePasswordArgs, api: &str) -> Result<()> {
    let service = super::open_session(api).await?;

    eprintln!("{}", "Changing password...".dimmed());

    let change = PasswordChange::new(
        &args.current_password,
        &args.new_password,
        &args.confirm_password,
    );
    service
        .change_password(&change)
        .await
        .map_err(super::user_error)?;

    output::success("Password changed");

    Ok(())
}
