use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

use txbatch::batch::{self, AlwaysConfirm, BatchJob, Confirm, Summary};
use txbatch::client::HttpUpdateClient;
use txbatch::error::Error;
use txbatch::health::{HealthChecker, Probe};

/// Add transaction IDs to orders via the order API
#[derive(Parser)]
#[command(name = "txbatch")]
#[command(about = "Add transaction IDs to unverified orders via the order API", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a CSV export and add transaction IDs to orders
    Run {
        /// Input CSV file path
        input: PathBuf,

        /// Output CSV file path
        output: PathBuf,

        /// Base URL of the API
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Authentication token (Bearer token), falls back to AUTH_TOKEN
        #[arg(long)]
        token: Option<String>,

        /// CSV delimiter
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Name of the transaction ID column
        #[arg(long, default_value = "Transaktions-ID")]
        transaction_col: String,

        /// Name of the order code column
        #[arg(long, default_value = "Bestellcode")]
        order_col: String,

        /// Perform a dry run without making actual API calls
        #[arg(long)]
        dry_run: bool,

        /// Answer yes to all confirmation prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Probe the API liveness and readiness endpoints
    Health {
        /// Base URL of the API
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Bearer token for authenticated endpoints, falls back to AUTH_TOKEN
        #[arg(long)]
        token: Option<String>,

        /// License ID to query the vendor endpoint (optional)
        #[arg(long)]
        license_id: Option<String>,

        /// Skip the vendor endpoint check
        #[arg(long)]
        skip_vendor: bool,
    },
}

/// Stdin-backed confirmation for interactive runs.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} (y/n): ");
        let _ = std::io::stdout().flush();
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            base_url,
            token,
            delimiter,
            transaction_col,
            order_col,
            dry_run,
            yes,
        } => {
            run_batch(
                input,
                output,
                base_url,
                token,
                delimiter,
                transaction_col,
                order_col,
                dry_run,
                yes,
            )
            .await
        }
        Commands::Health {
            base_url,
            token,
            license_id,
            skip_vendor,
        } => run_health(base_url, token, license_id, skip_vendor).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_batch(
    input: PathBuf,
    output: PathBuf,
    base_url: String,
    token: Option<String>,
    delimiter: String,
    transaction_col: String,
    order_col: String,
    dry_run: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let delimiter = parse_delimiter(&delimiter)?;
    let token = token.or_else(|| std::env::var("AUTH_TOKEN").ok());
    debug!(has_token = token.is_some(), dry_run, "starting batch run");

    let job = BatchJob {
        input,
        output,
        delimiter,
        order_col,
        transaction_col,
        dry_run,
        has_token: token.is_some(),
    };
    let client = HttpUpdateClient::new(base_url.clone(), token)?;
    let confirm: Box<dyn Confirm> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    };

    println!("Base URL: {base_url}");
    println!("Dry run: {dry_run}");

    match batch::run(&job, &client, confirm.as_ref()).await? {
        Some(summary) => {
            print_summary(&summary);
            Ok(())
        }
        None => {
            println!("Aborted.");
            Ok(())
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, Error> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err(Error::InvalidDelimiter(s.to_string())),
    }
}

fn print_summary(summary: &Summary) {
    println!("\n{}", "=".repeat(60));
    println!("Summary:");
    println!("  Total rows processed: {}", summary.total);
    println!("  Successful: {}", summary.succeeded);
    println!("  Failed/Skipped: {}", summary.failed);
    println!("{}", "=".repeat(60));
}

async fn run_health(
    base_url: String,
    token: Option<String>,
    license_id: Option<String>,
    skip_vendor: bool,
) -> anyhow::Result<()> {
    let token = token.or_else(|| std::env::var("AUTH_TOKEN").ok());
    let checker = HealthChecker::new(&base_url, token)?;
    let mut all_ok = true;

    print!("Checking health at {base_url}/healthz ... ");
    let _ = std::io::stdout().flush();
    report(checker.check_health().await?, &mut all_ok);

    print!("Checking ready at {base_url}/readyz ... ");
    let _ = std::io::stdout().flush();
    report(checker.check_ready().await?, &mut all_ok);

    if !skip_vendor {
        if let Some(license_id) = license_id {
            print!("Checking vendor license {license_id} ... ");
            let _ = std::io::stdout().flush();
            report(checker.check_vendor_license(&license_id).await?, &mut all_ok);
        } else {
            println!("Skipping vendor check: no license ID provided. Use --license-id to enable.");
        }
    }

    if !all_ok {
        anyhow::bail!("one or more probes failed");
    }
    Ok(())
}

fn report(probe: Probe, all_ok: &mut bool) {
    match probe {
        Probe::Ok => println!("OK"),
        Probe::Fail(msg) => {
            *all_ok = false;
            println!("FAIL ({msg})");
        }
    }
}
