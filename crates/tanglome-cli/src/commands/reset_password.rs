//! Reset-password command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tanglome_core::PasswordReset;

use crate::output;

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Reset token from the password-reset email
    #[arg(long)]
    pub token: String,

    /// New password
    #[arg(long)]
    pub new_password: String,

    /// New password confirmation
    #[arg(long)]
    pub confirm_password: String,
}

pub async fn run(args: ResetPasswordArgs, api: &str) -> Result<()> {
    let service = super::connect(api)?;

    eprintln!("{}", "Resetting password...".dimmed());

    let reset = PasswordReset::new(&args.token, &args.new_password, &args.confirm_password);
    let message = service
        .complete_password_reset(&reset)
        .await
        .map_err(super::user_error)?;

    output::success(&message);

    Ok(())
}
