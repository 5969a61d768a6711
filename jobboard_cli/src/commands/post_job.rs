//! The `post` subcommand: publishes a listing. Requires an employer token.

use anyhow::{bail, Result};
use clap::Args;
use jobboard_api::types::{JobType, NewJob, SalaryRange};
use jobboard_api::Client;

use crate::output::{print_job_detail, print_json, OutputFormat};

#[derive(Args)]
pub struct PostJobArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub location: String,

    /// Employment type: full-time, part-time, contract, internship
    #[arg(long = "type")]
    pub job_type: String,

    #[arg(long)]
    pub description: String,

    /// Comma-separated skill tags
    #[arg(long)]
    pub skills: Option<String>,

    /// Lower bound of the annual salary range
    #[arg(long)]
    pub salary_min: Option<i64>,

    /// Upper bound of the annual salary range
    #[arg(long)]
    pub salary_max: Option<i64>,

    /// Salary currency code (e.g. EUR)
    #[arg(long, default_value = "EUR")]
    pub currency: String,
}

pub async fn run(args: &PostJobArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let Ok(job_type) = args.job_type.parse::<JobType>() else {
        bail!(
            "invalid job type '{}', expected full-time, part-time, contract, or internship",
            args.job_type
        );
    };

    let salary = match (args.salary_min, args.salary_max) {
        (Some(min), Some(max)) => {
            if min > max {
                bail!("salary-min ({}) exceeds salary-max ({})", min, max);
            }
            Some(SalaryRange {
                min,
                max,
                currency: args.currency.clone(),
            })
        }
        (None, None) => None,
        _ => bail!("salary-min and salary-max must be given together"),
    };

    let skills = args
        .skills
        .as_deref()
        .map(|s| {
            s.split(',')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let resp = client
        .post_job(&NewJob {
            title: args.title.clone(),
            company: args.company.clone(),
            location: args.location.clone(),
            job_type,
            description: args.description.clone(),
            skills,
            salary,
        })
        .await?;

    match format {
        OutputFormat::Json => print_json(&resp.data)?,
        OutputFormat::Table => {
            println!("Published listing {}", resp.data.id);
            print_job_detail(&resp.data);
        }
    }
    Ok(())
}
