mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobboard_api::Client;

use crate::output::OutputFormat;

const DEFAULT_API_URL: &str = "http://localhost:4000/api";

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse and manage job-board listings from the terminal")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup(commands::auth::SignupArgs),
    /// Sign in and print a bearer token
    Signin(commands::auth::SigninArgs),
    /// List or look up job listings
    Jobs(commands::jobs::JobsArgs),
    /// Publish a job listing (employer token required)
    Post(commands::post_job::PostJobArgs),
    /// Apply to a listing (candidate token required)
    Apply(commands::apply::ApplyArgs),
    /// List your applications
    Applications,
    /// Show or update your profile
    Profile(commands::profile::ProfileArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jobboard_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let base_url =
        std::env::var("JOBBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let mut client = Client::new(&base_url);
    if let Ok(token) = std::env::var("JOBBOARD_TOKEN") {
        client = client.with_token(token);
    }

    match &cli.command {
        Commands::Signup(args) => commands::auth::run_signup(args, &client).await?,
        Commands::Signin(args) => commands::auth::run_signin(args, &client).await?,
        Commands::Jobs(args) => commands::jobs::run(args, &client, &format).await?,
        Commands::Post(args) => commands::post_job::run(args, &client, &format).await?,
        Commands::Apply(args) => commands::apply::run(args, &client, &format).await?,
        Commands::Applications => commands::applications::run(&client, &format).await?,
        Commands::Profile(args) => commands::profile::run(args, &client, &format).await?,
    }

    Ok(())
}
