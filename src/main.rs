//! finboard main entry point

use anyhow::Context;
use clap::Parser;
use finboard_api::{start_server, AppState};
use finboard_config::{Config, ConfigError};
use finboard_core::TransactionStore;
use finboard_data::{JsonTransactionSource, TransactionSource};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "finboard")]
#[command(version = "0.1.0")]
#[command(about = "Transactions API for the finboard dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, missing) = match Config::load(args.config.clone()) {
        Ok(config) => (config, None),
        Err(e @ ConfigError::FileNotFound { .. }) => (Config::default(), Some(e)),
        Err(e) => {
            init_logging("info");
            log::error!("{}", e.to_details());
            return Err(e).context(format!("Failed to load {}", args.config.display()));
        }
    };

    init_logging(&config.logging.level);

    if let Some(e) = missing {
        log::warn!("Using default configuration: {}", e.to_details());
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        let data_path = config.transactions_path();
        log::info!("Looking for transactions file: {}", data_path.display());

        let transactions = if data_path.exists() {
            JsonTransactionSource
                .load_file(data_path.clone())
                .await
                .with_context(|| format!("Failed to load {}", data_path.display()))?
        } else {
            log::warn!("Transactions file not found: {}", data_path.display());
            Vec::new()
        };

        let state = AppState::new(config, TransactionStore::new(transactions));
        start_server(state).await?;
        Ok::<(), anyhow::Error>(())
    })
}
