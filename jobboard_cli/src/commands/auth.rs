//! The `signup` and `signin` subcommands.

use anyhow::{bail, Result};
use clap::Args;
use jobboard_api::types::{Credentials, Role, SignupRequest};
use jobboard_api::Client;

#[derive(Args)]
pub struct SignupArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    /// Account role: candidate or employer
    #[arg(long, default_value = "candidate")]
    pub role: String,
}

#[derive(Args)]
pub struct SigninArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

pub async fn run_signup(args: &SignupArgs, client: &Client) -> Result<()> {
    let Ok(role) = args.role.parse::<Role>() else {
        bail!("invalid role '{}', expected candidate or employer", args.role);
    };

    let auth = client
        .signup(&SignupRequest {
            name: args.name.clone(),
            email: args.email.clone(),
            password: args.password.clone(),
            role,
        })
        .await?;

    println!("Signed up as {} ({})", auth.user.name, auth.user.role);
    print_token_hint(&auth.token);
    Ok(())
}

pub async fn run_signin(args: &SigninArgs, client: &Client) -> Result<()> {
    let auth = client
        .signin(&Credentials {
            email: args.email.clone(),
            password: args.password.clone(),
        })
        .await?;

    println!("Signed in as {} ({})", auth.user.name, auth.user.role);
    print_token_hint(&auth.token);
    Ok(())
}

fn print_token_hint(token: &str) {
    println!("Token: {}", token);
    println!("Authenticated commands read it from the environment:");
    println!("  export JOBBOARD_TOKEN={}", token);
}
