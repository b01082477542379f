//! Forgot-password command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;

#[derive(Args, Debug)]
pub struct ForgotPasswordArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,
}

pub async fn run(args: ForgotPasswordArgs, api: &str) -> Result<()> {
    let service = super::connect(api)?;

    eprintln!("{}", "Requesting password reset...".dimmed());

    let message = service
        .request_password_reset(&args.email)
        .await
        .map_err(super::user_error)?;

    output::success(&message);

    Ok(())
}
