//! Email Phone Validator - command line entry point
//!
//! Validates a single email address or phone number and reports the verdict
//! on stdout. The exit status is 0 for valid input, 1 for invalid input, and
//! 2 when the configuration cannot be loaded.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use email_phone_validator::{Config, Validator};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Validate email addresses and phone numbers
#[derive(Parser)]
#[command(name = "email-phone-validator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the verdict as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an email address
    Email {
        /// Email address to check
        address: String,
    },

    /// Validate a phone number
    Phone {
        /// Phone number, with or without a country calling code
        number: String,
        /// ISO 3166-1 alpha-2 region (defaults to VALIDATOR_DEFAULT_REGION or IN)
        #[arg(short, long)]
        region: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(cli.verbose, "error");
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(cli.verbose, &config.log_level);
    debug!("Default region: {}", config.default_region);

    let valid = validate(&cli.command, &config);

    if let Err(e) = report(&cli, valid) {
        error!("{:#}", e);
        return ExitCode::from(2);
    }

    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

// Logs go to stderr so stdout carries only the verdict.
fn init_logging(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validate(command: &Commands, config: &Config) -> bool {
    let validator = Validator::new(config);

    let (subject, valid) = match command {
        Commands::Email { address } => ("email", validator.email(address)),
        Commands::Phone {
            number,
            region: Some(region),
        } => ("phone", validator.phone_for_region(number, region)),
        Commands::Phone {
            number,
            region: None,
        } => ("phone", validator.phone(number)),
    };

    info!(subject, valid, "Validation finished");
    valid
}

fn report(cli: &Cli, valid: bool) -> Result<()> {
    let verdict = if valid { "valid" } else { "invalid" };

    if cli.json {
        let body = serde_json::json!({ "valid": valid, "verdict": verdict });
        let line = serde_json::to_string(&body).context("Failed to encode verdict")?;
        println!("{}", line);
    } else {
        println!("{}", verdict);
    }

    Ok(())
}
