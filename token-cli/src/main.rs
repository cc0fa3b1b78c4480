//! Token CLI
//!
//! Command-line interface for verifying link tokens, locally or against a
//! running validation server.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use token_client::TokenClient;
use token_types::{Secret, VerificationResult};
use token_verifier::TokenVerifier;

#[derive(Parser)]
#[command(name = "token")]
#[command(author, version, about = "Link token CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a token locally with the shared secret
    Verify {
        /// The token to verify
        token: String,
        /// Shared HMAC secret
        #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
        secret: String,
        /// Evaluate as of this instant (seconds since epoch) instead of now
        #[arg(long)]
        now: Option<i64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask a running server whether a token is valid
    Check {
        /// The token to check
        token: String,
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Check server health
    Health {
        #[command(flatten)]
        server: ServerArgs,
    },
}

#[derive(clap::Args)]
struct ServerArgs {
    /// Base URL of the validation server
    #[arg(long, env = "TOKEN_API_URL", default_value = "http://localhost:3000")]
    api_url: String,
    /// Path the validate route is mounted under
    #[arg(long, env = "TOKEN_BASE_PATH", default_value = "/token")]
    base_path: String,
}

impl ServerArgs {
    fn client(&self) -> TokenClient {
        TokenClient::new(&self.api_url).with_base_path(&self.base_path)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify {
            token,
            secret,
            now,
            json,
        } => {
            let (result, code) = verify_locally(&token, secret, now)?;
            println!("{}", render(&result, json)?);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Check { token, server } => {
            let client = server.client();
            if client.validate(&token).await? {
                println!("✓ Token accepted by {}", client.validate_url());
            } else {
                println!("✗ Token rejected by {}", client.validate_url());
                std::process::exit(1);
            }
        }
        Commands::Health { server } => {
            let healthy = server.client().health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Verifies `token` offline. Exit code is 1 when the token is refused.
fn verify_locally(
    token: &str,
    secret: String,
    now: Option<i64>,
) -> Result<(VerificationResult, i32)> {
    let secret = Secret::new(secret)?;
    let now = resolve_now(now)?;
    let result = TokenVerifier::new(secret).verify(token, now);
    let code = if result.valid { 0 } else { 1 };
    Ok((result, code))
}

fn render(result: &VerificationResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.message.clone())
    }
}

fn resolve_now(now: Option<i64>) -> Result<DateTime<Utc>> {
    match now {
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .with_context(|| format!("--now {} is out of range", secs)),
        None => Ok(Utc::now()),
    }
}
