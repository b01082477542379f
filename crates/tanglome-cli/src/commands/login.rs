//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api: &str) -> Result<()> {
    let service = super::connect(api)?;

    eprintln!("{}", "Signing in...".dimmed());

    let user = service
        .login(&args.email, &args.password)
        .await
        .map_err(super::user_error)?;

    output::success("Signed in successfully");
    println!();
    output::field("Name", &user.name);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());

    Ok(())
}
