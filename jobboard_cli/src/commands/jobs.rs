//! The `jobs` subcommand: lists listings with filters, or looks one up by id.

use anyhow::{bail, Result};
use clap::Args;
use jobboard_api::types::JobType;
use jobboard_api::{Client, JobQuery, JobSortBy, Query, SortDirection};

use crate::output::{print_job_detail, print_jobs_table, print_json, OutputFormat};

#[derive(Args)]
pub struct JobsArgs {
    /// Look up a single listing by id instead of listing
    #[arg(long)]
    pub id: Option<String>,

    /// Full-text search over title, company, and skills
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by location substring (e.g. Berlin, remote)
    #[arg(long)]
    pub location: Option<String>,

    /// Filter by employment type: full-time, part-time, contract, internship
    #[arg(long = "type")]
    pub job_type: Option<String>,

    /// Only jobs posted within the last N days
    #[arg(long)]
    pub days: Option<i64>,

    /// Sort key: posted, salary, company
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<i64>,
}

pub async fn run(args: &JobsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let resp = client.job(id).await?;
        match format {
            OutputFormat::Json => print_json(&resp.data)?,
            OutputFormat::Table => print_job_detail(&resp.data),
        }
        return Ok(());
    }

    let mut query = JobQuery::default().with_page(args.page);
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }
    if let Some(search) = &args.search {
        query = query.with_search(search.clone());
    }
    if let Some(location) = &args.location {
        query = query.with_location(location.clone());
    }
    if let Some(job_type) = &args.job_type {
        let Ok(job_type) = job_type.parse::<JobType>() else {
            bail!(
                "invalid job type '{}', expected full-time, part-time, contract, or internship",
                job_type
            );
        };
        query = query.with_job_type(job_type);
    }
    if let Some(days) = args.days {
        query = query.with_posted_within_days(days);
    }
    if let Some(sort) = &args.sort {
        let Ok(sort) = sort.parse::<JobSortBy>() else {
            bail!("invalid sort key '{}', expected posted, salary, or company", sort);
        };
        query = query.with_sort_by(sort);
    }
    if let Some(order) = &args.order {
        let Ok(order) = order.parse::<SortDirection>() else {
            bail!("invalid order '{}', expected asc or desc", order);
        };
        query = query.with_sort_direction(order);
    }

    let resp = client.jobs(&query).await?;
    match format {
        OutputFormat::Json => print_json(&resp.data)?,
        OutputFormat::Table => {
            print_jobs_table(&resp.data);
            println!(
                "Page {}/{} ({} listings)",
                resp.meta.paging.page, resp.meta.paging.total_pages, resp.meta.paging.total_items
            );
        }
    }
    Ok(())
}
