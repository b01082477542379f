//! Register command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tanglome_core::Registration;

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Password confirmation
    #[arg(long)]
    pub confirm_password: String,
}

pub async fn run(args: RegisterArgs, api: &str) -> Result<()> {
    let service = super::connect(api)?;

    eprintln!("{}", "Creating account...".dimmed());

    let registration = Registration::new(
        &args.name,
        &args.email,
        &args.password,
        &args.confirm_password,
    );
    let user = service
        .register(&registration)
        .await
        .map_err(super::user_error)?;

    output::success("Account created");
    println!();
    output::field("Name", &user.name);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());

    Ok(())
}
