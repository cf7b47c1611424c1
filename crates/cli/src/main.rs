//! Brand Hangar CLI - Order lookup from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Look up an order through the proxy
//! bh-cli lookup ORD-100
//!
//! # Use a different proxy
//! bh-cli lookup ORD-100 --proxy-url https://brand-hangar-backend.onrender.com
//!
//! # Show the Mintsoft status table
//! bh-cli statuses
//! ```
//!
//! # Commands
//!
//! - `lookup` - Search for an order and print its details
//! - `statuses` - Print every known order status and its badge colors

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "bh-cli")]
#[command(author, version, about = "Brand Hangar order lookup tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an order by order number
    Lookup {
        /// Order number as printed on the confirmation email
        order_number: String,

        /// Base URL of the order lookup proxy
        #[arg(long, env = "BH_PROXY_URL", default_value = "http://localhost:3001")]
        proxy_url: Url,
    },
    /// Print the order status table
    Statuses,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brand_hangar_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Lookup {
            order_number,
            proxy_url,
        } => {
            let shown = commands::lookup::run(&proxy_url, &order_number).await?;
            Ok(if shown {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Statuses => {
            commands::statuses::run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
