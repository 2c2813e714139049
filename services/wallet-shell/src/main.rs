//! Iron Wallet Shell
//!
//! Command-line front end for the wallet client. The session is kept in a
//! credential file so it survives between invocations.

mod cli;
mod config;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ironwallet_app::WalletApp;
use ironwallet_client::FileCredentialStore;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::ShellConfig;
use crate::output::{ConsoleNotifier, Output};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so views can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wallet_shell=info,ironwallet_app=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ShellConfig::from_env().context("invalid configuration")?;
    tracing::debug!(
        backend = %config.client.backend_url(),
        credentials = %config.credentials_path.display(),
        "Starting wallet shell"
    );

    let app = WalletApp::builder(config.client)
        .store(Arc::new(FileCredentialStore::new(config.credentials_path)))
        .notifier(Arc::new(ConsoleNotifier))
        .deposit_addresses(config.deposit_addresses)
        .not_found_policy(config.not_found)
        .build()
        .context("failed to create wallet client")?;

    let ok = cli::run(&app, cli.command, &Output::new(cli.json)).await;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
