//! The `profile` subcommand: shows the profile, or updates the fields given
//! as flags. Requires a token.

use anyhow::Result;
use clap::Args;
use jobboard_api::types::ProfileUpdate;
use jobboard_api::Client;

use crate::output::{print_json, print_profile, OutputFormat};

#[derive(Args)]
pub struct ProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New headline shown to employers
    #[arg(long)]
    pub headline: Option<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,

    /// Comma-separated skill tags, replacing the current set
    #[arg(long)]
    pub skills: Option<String>,
}

impl ProfileArgs {
    fn as_update(&self) -> Option<ProfileUpdate> {
        if self.name.is_none()
            && self.headline.is_none()
            && self.location.is_none()
            && self.skills.is_none()
        {
            return None;
        }
        Some(ProfileUpdate {
            name: self.name.clone(),
            headline: self.headline.clone(),
            location: self.location.clone(),
            skills: self.skills.as_deref().map(|s| {
                s.split(',')
                    .map(|skill| skill.trim().to_string())
                    .filter(|skill| !skill.is_empty())
                    .collect()
            }),
        })
    }
}

pub async fn run(args: &ProfileArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.as_update() {
        Some(update) => client.update_profile(&update).await?,
        None => client.profile().await?,
    };

    match format {
        OutputFormat::Json => print_json(&resp.data)?,
        OutputFormat::Table => print_profile(&resp.data),
    }
    Ok(())
}
