//! Dukkan CLI - Order message tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the escaped order message for an order file
//! dk-cli order encode -f order.yaml
//!
//! # Print the WhatsApp link for an order file
//! dk-cli order encode -f order.yaml -p "+965 5555 1234"
//!
//! # Print the readable order message
//! dk-cli order encode -f order.yaml --preview
//!
//! # Format an amount in Kuwaiti dinar
//! dk-cli money 12.5
//!
//! # List delivery and payment methods
//! dk-cli methods
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "dk-cli")]
#[command(author, version, about = "Dukkan CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build order messages
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Format an amount in Kuwaiti dinar (ar-KW)
    Money {
        /// Amount, e.g. 12.5
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// List delivery and payment methods
    Methods,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Encode an order file (YAML or JSON)
    Encode {
        /// Path to the order file
        #[arg(short, long)]
        file: String,

        /// WhatsApp number; prints a wa.me link instead of the bare payload
        #[arg(short, long)]
        phone: Option<String>,

        /// Print the readable message instead of the escaped one
        #[arg(long)]
        preview: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Order { action } => match action {
            OrderAction::Encode {
                file,
                phone,
                preview,
            } => {
                commands::order::encode(&file, phone, preview).await?;
            }
        },
        Commands::Money { amount } => commands::catalog::money(amount),
        Commands::Methods => commands::catalog::methods(),
    }
    Ok(())
}
