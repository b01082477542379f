//! Update-profile command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tanglome_core::{ProfileUpdate, SocialLinks};

use crate::output;

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// Display name (required by the API)
    #[arg(long)]
    pub name: String,

    /// Short biography
    #[arg(long)]
    pub bio: Option<String>,

    /// Company or organization
    #[arg(long)]
    pub company: Option<String>,

    /// Job title or position
    #[arg(long)]
    pub position: Option<String>,

    /// Personal or company website
    #[arg(long)]
    pub website: Option<String>,

    /// LinkedIn profile
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Twitter profile
    #[arg(long)]
    pub twitter: Option<String>,

    /// GitHub profile
    #[arg(long)]
    pub github: Option<String>,
}

impl UpdateProfileArgs {
    fn into_update(self) -> ProfileUpdate {
        let social_links = if self.linkedin.is_some() || self.twitter.is_some() || self.github.is_some()
        {
            Some(SocialLinks {
                linkedin: self.linkedin,
                twitter: self.twitter,
                github: self.github,
            })
        } else {
            None
        };

        ProfileUpdate {
            name: self.name,
            bio: self.bio,
            company: self.company,
            position: self.position,
            website: self.website,
            social_links,
        }
    }
}

pub async fn run(args: UpdateProfileArgs, api: &str) -> Result<()> {
    let service = super::open_session(api).await?;

    eprintln!("{}", "Updating profile...".dimmed());

    let user = service
        .update_profile(&args.into_update())
        .await
        .map_err(super::user_error)?;

    output::success("Profile updated");
    println!();
    output::field("Name", &user.name);
    output::optional_field("Bio", user.bio.as_deref());
    output::optional_field("Company", user.company.as_deref());
    output::optional_field("Position", user.position.as_deref());
    output::optional_field("Website", user.website.as_deref());

    Ok(())
}
