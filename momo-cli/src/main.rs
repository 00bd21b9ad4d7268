//! Momo CLI
//!
//! Command-line interface for the mobile-money gateway client.

mod logging;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use momo_client::{MobileMoneyClient, TracingLogger};
use momo_types::{Amount, Credentials, OperationResult, SubscriberDetails, TransactionRequest, legacy};

#[derive(Parser)]
#[command(name = "momo")]
#[command(author, version, about = "Mobile-money gateway CLI client", long_about = None)]
struct Cli {
    /// Gateway endpoint URL
    #[arg(long, env = "MOMO_BASE_URL")]
    base_url: String,

    /// Basic-Auth user
    #[arg(long, env = "MOMO_USERNAME")]
    username: String,

    /// Basic-Auth password
    #[arg(long, env = "MOMO_PASSWORD", hide_env_values = true)]
    password: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(
        long,
        env = "MOMO_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: Option<u64>,

    /// Print `{"error": "<message>"}` instead of the tagged error shape
    #[arg(long)]
    legacy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TransactionArgs {
    #[arg(long)]
    amount: Amount,
    #[arg(long)]
    request_id: String,
    /// Subscriber phone number
    #[arg(long)]
    destination: String,
}

impl From<TransactionArgs> for TransactionRequest {
    fn from(args: TransactionArgs) -> Self {
        TransactionRequest::new(args.amount, args.request_id, args.destination)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Collect a payment from a subscriber
    Payment(TransactionArgs),
    /// Transfer funds to a subscriber
    Transfer(TransactionArgs),
    /// Transfer funds to another operator's subscriber
    CrossTransfer(TransactionArgs),
    /// Debit a subscriber without confirmation
    AutoDebit(TransactionArgs),
    /// Check a subscriber account
    AccountStatus {
        /// Subscriber phone number
        phone_number: String,
    },
    /// Check an earlier transaction
    TransactionStatus {
        request_id: String,
    },
    /// Register a subscriber
    RegisterSubscriber {
        request_id: String,
        /// Registration field as key=value (repeatable)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected key=value, got: {}", s))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn subscriber_details(fields: Vec<(String, String)>) -> Result<SubscriberDetails> {
    let mut details = SubscriberDetails::default();
    for (key, value) in fields {
        details.set(&key, value).map_err(anyhow::Error::msg)?;
    }
    Ok(details)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init_logging(&logging::LoggingConfig::from_env()?)?;

    let credentials = Credentials::new(cli.base_url, cli.username, cli.password)?;
    let client = match cli.timeout_secs {
        Some(secs) => MobileMoneyClient::with_timeout(credentials, Duration::from_secs(secs))?,
        None => MobileMoneyClient::new(credentials),
    }
    .with_logger(Arc::new(TracingLogger));

    let result: OperationResult = match cli.command {
        Commands::Payment(args) => client.payment(&args.into()).await,
        Commands::Transfer(args) => client.transfer(&args.into()).await,
        Commands::CrossTransfer(args) => client.cross_transfer(&args.into()).await,
        Commands::AutoDebit(args) => client.auto_debit(&args.into()).await,
        Commands::AccountStatus { phone_number } => client.account_status(&phone_number).await,
        Commands::TransactionStatus { request_id } => {
            client.transaction_status(&request_id).await
        }
        Commands::RegisterSubscriber { request_id, fields } => {
            let details = subscriber_details(fields)?;
            client.subscriber_registration(&request_id, &details).await
        }
    };

    let output = if cli.legacy {
        legacy::to_legacy_value(&result)
    } else {
        legacy::to_tagged_value(&result)
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
