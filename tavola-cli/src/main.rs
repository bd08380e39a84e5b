//! tavola: terminal front end for the restaurant order backend
//!
//! Menu and table maintenance, order creation for a table, and the order
//! board with status actions and periodic refresh.

mod commands;
mod render;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use shared::Decimal;
use shared::models::OrderStatus;
use tavola_client::ClientConfig;

#[derive(Parser)]
#[command(name = "tavola")]
#[command(about = "Restaurant order client", version)]
struct Cli {
    /// Backend API root
    #[arg(long, global = true, env = "TAVOLA_API_URL")]
    api_url: Option<String>,
    /// Request timeout in seconds (none by default)
    #[arg(long, global = true, env = "TAVOLA_TIMEOUT_SECS")]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Menu items
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },
    /// Dining tables
    Tables {
        #[command(subcommand)]
        command: TableCommand,
    },
    /// Orders
    Orders {
        #[command(subcommand)]
        command: OrderCommand,
    },
}

#[derive(Subcommand)]
enum MenuCommand {
    List {
        /// Only items of this category ("All" lists everything)
        #[arg(long)]
        category: Option<String>,
    },
    Show {
        id: i64,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum TableCommand {
    List {
        /// Only tables that are not occupied
        #[arg(long, default_value_t = false)]
        available: bool,
    },
    Add {
        #[arg(long)]
        number: i32,
        #[arg(long)]
        capacity: i32,
    },
    Update {
        id: i64,
        #[arg(long)]
        number: Option<i32>,
        #[arg(long)]
        capacity: Option<i32>,
        #[arg(long, action = ArgAction::Set)]
        occupied: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum OrderCommand {
    List {
        /// Only orders in this status (e.g. PENDING)
        #[arg(long, value_parser = commands::parse_status)]
        status: Option<OrderStatus>,
    },
    Show {
        id: i64,
    },
    /// Compose and submit an order for a table
    Create {
        table_id: i64,
        /// ID[:QTY[:NOTE]], repeatable
        #[arg(long = "item", value_parser = commands::parse_item_spec)]
        items: Vec<commands::ItemSpec>,
    },
    /// Move an order to its next status
    Advance {
        id: i64,
    },
    /// Show the order list and refresh it periodically until Ctrl-C
    Watch {
        /// Refresh period in seconds
        #[arg(long, env = "TAVOLA_POLL_INTERVAL_SECS")]
        interval: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tavola=info,tavola_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }

    match commands::run(config, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
