//! # coingate
//!
//! Command-line access to the CoinGate orders API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export COINGATE_APP_ID=1234
//! export COINGATE_API_TOKEN=...
//! export COINGATE_SANDBOX=true
//!
//! coingate create --order-id abc123 --price-amount 100.01 --price-currency USD --receive-currency BTC
//! coingate checkout 58743 --pay-currency BTC
//! coingate get 58743
//! coingate list --per-page 25
//! coingate callback < body.txt
//! ```
//!
//! Responses are printed to stdout as JSON; logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use coingate_client::{
    CallbackData, CheckoutRequest, CoinGateClient, CoinGateConfig, CreateOrderRequest,
    ListOrdersRequest,
};
use serde::Serialize;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "coingate", version, about = "CoinGate orders API client")]
struct Cli {
    /// Use the sandbox endpoint regardless of COINGATE_SANDBOX
    #[arg(long, global = true)]
    sandbox: bool,

    /// Per-call timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new order
    Create {
        #[arg(long)]
        order_id: String,
        /// Decimal amount, e.g. 100.01
        #[arg(long)]
        price_amount: String,
        #[arg(long)]
        price_currency: String,
        #[arg(long)]
        receive_currency: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        callback_url: Option<String>,
        #[arg(long)]
        cancel_url: Option<String>,
        #[arg(long)]
        success_url: Option<String>,
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        purchaser_email: Option<String>,
    },
    /// Select the pay currency for an order
    Checkout {
        id: i64,
        #[arg(long)]
        pay_currency: String,
        #[arg(long)]
        lightning_network: bool,
        #[arg(long)]
        purchaser_email: Option<String>,
        #[arg(long)]
        platform_id: Option<i32>,
    },
    /// Fetch a single order
    Get { id: i64 },
    /// List orders
    List {
        #[arg(long, default_value_t = 0)]
        per_page: i32,
        #[arg(long, default_value_t = 0)]
        page: i32,
        #[arg(long, default_value = "")]
        sort: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Parse a form-encoded callback body read from stdin
    Callback,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let Cli {
        sandbox,
        timeout_secs,
        command,
    } = Cli::parse();
    let client = || build_client(sandbox, timeout_secs);

    match command {
        Command::Create {
            order_id,
            price_amount,
            price_currency,
            receive_currency,
            title,
            description,
            callback_url,
            cancel_url,
            success_url,
            token,
            purchaser_email,
        } => {
            let request = CreateOrderRequest {
                title,
                description,
                callback_url,
                cancel_url,
                success_url,
                token,
                purchaser_email,
                ..CreateOrderRequest::new(order_id, price_amount, price_currency, receive_currency)
            };
            print_json(&client()?.create_order(request).await?)
        }
        Command::Checkout {
            id,
            pay_currency,
            lightning_network,
            purchaser_email,
            platform_id,
        } => {
            let request = CheckoutRequest {
                pay_currency,
                lightning_network: lightning_network.then_some(true),
                purchaser_email,
                platform_id,
            };
            print_json(&client()?.checkout(id, request).await?)
        }
        Command::Get { id } => print_json(&client()?.get_order(id).await?),
        Command::List {
            per_page,
            page,
            sort,
            from,
            to,
        } => {
            let request = ListOrdersRequest {
                per_page,
                page,
                sort,
                created_from: from,
                created_to: to,
            };
            print_json(&client()?.list_orders(request).await?)
        }
        // No credentials needed to parse a callback
        Command::Callback => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("reading callback body from stdin")?;
            print_json(&CallbackData::from_form(&body)?)
        }
    }
}

fn build_client(sandbox: bool, timeout_secs: Option<u64>) -> anyhow::Result<CoinGateClient> {
    let mut config = CoinGateConfig::from_env().context("loading CoinGate configuration")?;

    if sandbox {
        config = config.with_sandbox(true);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    debug!("Using CoinGate endpoint {}", config.api_base_url);

    Ok(CoinGateClient::new(config)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
