//! Table and JSON rendering for CLI results.

use anyhow::Result;
use jobboard_api::types::{Application, Job, Profile, SalaryRange};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct JobRow {
    #[tabled(rename = "Posted")]
    #[serde(rename = "Posted")]
    posted: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    job_type: String,
    #[tabled(rename = "Salary")]
    #[serde(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
}

#[derive(Tabled, Serialize)]
struct ApplicationRow {
    #[tabled(rename = "Applied")]
    #[serde(rename = "Applied")]
    applied: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

fn job_row(job: &Job) -> JobRow {
    JobRow {
        posted: job.posted_at.format("%Y-%m-%d").to_string(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        job_type: job.job_type.to_string(),
        salary: format_salary(job.salary.as_ref()),
        id: job.id.clone(),
    }
}

fn format_salary(salary: Option<&SalaryRange>) -> String {
    match salary {
        Some(range) => format!("{}-{} {}", range.min, range.max, range.currency),
        None => "-".to_string(),
    }
}

pub fn print_jobs_table(jobs: &[Job]) {
    let rows: Vec<JobRow> = jobs.iter().map(job_row).collect();
    println!("{}", Table::new(rows).with(Style::psql()));
}

pub fn print_applications_table(applications: &[Application]) {
    let rows: Vec<ApplicationRow> = applications
        .iter()
        .map(|a| ApplicationRow {
            applied: a.applied_at.format("%Y-%m-%d").to_string(),
            title: a.job_title.clone(),
            company: a.company.clone(),
            status: a.status.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()));
}

pub fn print_job_detail(job: &Job) {
    println!("{} at {} ({})", job.title, job.company, job.location);
    println!("Type:    {}", job.job_type);
    println!("Salary:  {}", format_salary(job.salary.as_ref()));
    println!("Posted:  {}", job.posted_at.format("%Y-%m-%d"));
    if !job.skills.is_empty() {
        println!("Skills:  {}", job.skills.join(", "));
    }
    println!();
    println!("{}", job.description);
}

pub fn print_profile(profile: &Profile) {
    println!("{} <{}> ({})", profile.name, profile.email, profile.role);
    if let Some(headline) = &profile.headline {
        println!("Headline: {}", headline);
    }
    if let Some(location) = &profile.location {
        println!("Location: {}", location);
    }
    if !profile.skills.is_empty() {
        println!("Skills:   {}", profile.skills.join(", "));
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use jobboard_api::types::JobType;

    fn sample_job() -> Job {
        Job {
            id: "abc123".to_string(),
            title: "Senior Backend Engineer".to_string(),
            company: "Nimbus Analytics".to_string(),
            location: "Berlin".to_string(),
            job_type: JobType::FullTime,
            description: "Own the pipeline.".to_string(),
            skills: vec!["rust".to_string()],
            salary: Some(SalaryRange {
                min: 85000,
                max: 110000,
                currency: "EUR".to_string(),
            }),
            posted_at: Utc.with_ymd_and_hms(2025, 7, 14, 9, 30, 0).unwrap(),
            employer_id: "emp1".to_string(),
        }
    }

    #[test]
    fn job_row_formats_fields() {
        let row = job_row(&sample_job());
        assert_eq!(row.posted, "2025-07-14");
        assert_eq!(row.job_type, "full-time");
        assert_eq!(row.salary, "85000-110000 EUR");
    }

    #[test]
    fn missing_salary_renders_as_dash() {
        let mut job = sample_job();
        job.salary = None;
        assert_eq!(job_row(&job).salary, "-");
    }
}
