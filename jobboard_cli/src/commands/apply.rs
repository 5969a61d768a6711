//! The `apply` subcommand. Requires a candidate token.

use anyhow::Result;
use clap::Args;
use jobboard_api::types::NewApplication;
use jobboard_api::Client;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ApplyArgs {
    /// Id of the listing to apply to
    pub job_id: String,

    /// Optional cover note sent with the application
    #[arg(long)]
    pub note: Option<String>,
}

pub async fn run(args: &ApplyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .apply(
            &args.job_id,
            &NewApplication {
                cover_note: args.note.clone(),
            },
        )
        .await?;

    match format {
        OutputFormat::Json => print_json(&resp.data)?,
        OutputFormat::Table => println!(
            "Applied to {} at {} ({})",
            resp.data.job_title, resp.data.company, resp.data.status
        ),
    }
    Ok(())
}
