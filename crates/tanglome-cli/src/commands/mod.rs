//! Subcommand implementations.

mod change_password;
mod forgot_password;
mod login;
mod logout;
mod register;
mod reset_password;
mod update_profile;
mod whoami;

use anyhow::{Context, Result};
use clap::Subcommand;

use tanglome_core::ApiUrl;
use tanglome_http::HttpGateway;
use tanglome_session::SessionService;
use tanglome_store::FileTokenStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login(login::LoginArgs),

    /// Create an account and sign in
    Register(register::RegisterArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Sign out and clear the stored token
    Logout(logout::LogoutArgs),

    /// Update profile fields
    UpdateProfile(update_profile::UpdateProfileArgs),

    /// Change the account password
    ChangePassword(change_password::ChangePasswordArgs),

    /// Request a password-reset email
    ForgotPassword(forgot_password::ForgotPasswordArgs),

    /// Complete a password reset with an emailed token
    ResetPassword(reset_password::ResetPasswordArgs),
}

pub async fn handle(command: Commands, api: &str) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args, api).await,
        Commands::Register(args) => register::run(args, api).await,
        Commands::Whoami(args) => whoami::run(args, api).await,
        Commands::Logout(args) => logout::run(args, api).await,
        Commands::UpdateProfile(args) => update_profile::run(args, api).await,
        Commands::ChangePassword(args) => change_password::run(args, api).await,
        Commands::ForgotPassword(args) => forgot_password::run(args, api).await,
        Commands::ResetPassword(args) => reset_password::run(args, api).await,
    }
}

/// The concrete service the CLI composes.
pub(crate) type CliSession = SessionService<FileTokenStore, HttpGateway>;

/// Build the session service without resolving any stored credential.
pub(crate) fn connect(api: &str) -> Result<CliSession> {
    let api = ApiUrl::new(api).context("Invalid API URL")?;
    let store = FileTokenStore::new().context("Failed to open token storage")?;
    let gateway = HttpGateway::new(api);
    Ok(SessionService::new(store, gateway))
}

/// Build the session service and run the startup validation check.
pub(crate) async fn open_session(api: &str) -> Result<CliSession> {
    let service = connect(api)?;
    service.initialize().await;
    Ok(service)
}

/// Surface an operation failure as its user-facing message.
pub(crate) fn user_error(err: tanglome_core::Error) -> anyhow::Error {
    anyhow::anyhow!(err.user_message())
}
