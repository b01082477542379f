//! Whoami command implementation.

use anyhow::{Result, bail};
use clap::Args;

use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, api: &str) -> Result<()> {
    let service = super::open_session(api).await?;

    let Some(user) = service.user() else {
        bail!("No active session. Run 'tanglome login' first.");
    };

    output::field("Name", &user.name);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());
    output::optional_field("Bio", user.bio.as_deref());
    output::optional_field("Company", user.company.as_deref());
    output::optional_field("Position", user.position.as_deref());
    output::optional_field("Website", user.website.as_deref());
    output::optional_field("LinkedIn", user.social_links.linkedin.as_deref());
    output::optional_field("Twitter", user.social_links.twitter.as_deref());
    output::optional_field("GitHub", user.social_links.github.as_deref());
    if let Some(created) = user.created_at {
        output::field("Member since", &created.format("%Y-%m-%d").to_string());
    }

    Ok(())
}
