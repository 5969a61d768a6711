//! The `applications` subcommand. Requires a candidate token.

use anyhow::Result;
use jobboard_api::Client;

use crate::output::{print_applications_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.applications().await?;

    match format {
        OutputFormat::Json => print_json(&resp.data)?,
        OutputFormat::Table => {
            if resp.data.is_empty() {
                println!("No applications yet.");
            } else {
                print_applications_table(&resp.data);
            }
        }
    }
    Ok(())
}
