use clap::Parser;
use ledger_engine::application::dispatcher::NotificationDispatcher;
use ledger_engine::application::engine::LedgerEngine;
use ledger_engine::domain::ports::AccountStoreBox;
use ledger_engine::infrastructure::in_memory::InMemoryAccountStore;
use ledger_engine::infrastructure::notifier::ConsoleNotifier;
use ledger_engine::interfaces::csv::account_writer::AccountWriter;
use ledger_engine::interfaces::csv::command_reader::{CommandKind, CommandReader};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file (create/transfer rows)
    input: PathBuf,

    /// Emit the final account snapshot as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let dispatcher = NotificationDispatcher::new(Arc::new(ConsoleNotifier::new()));
    let engine = LedgerEngine::new(store, dispatcher);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        let command = match command_result {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error reading command: {e}");
                continue;
            }
        };
        let result = match command.op {
            CommandKind::Create => {
                engine
                    .create_account(&command.account, command.amount.unwrap_or_default())
                    .await
            }
            CommandKind::Transfer => match (&command.counterparty, command.amount) {
                (Some(to), Some(amount)) => engine
                    .transfer(&command.account, to, amount)
                    .await
                    .map(|_| ()),
                _ => {
                    eprintln!("Error processing command: transfer requires a counterparty and an amount");
                    continue;
                }
            },
        };
        if let Err(e) = result {
            eprintln!("Error processing command: {e}");
        }
    }

    // Snapshot before shutdown so the engine can drain notifications last.
    let accounts = engine.all_accounts().await.into_diagnostic()?;
    let mut views = Vec::with_capacity(accounts.len());
    for account in &accounts {
        views.push(account.view().await);
    }
    engine.shutdown().await;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    if cli.json {
        writer.write_json(views).into_diagnostic()?;
    } else {
        writer.write_csv(views).into_diagnostic()?;
    }

    Ok(())
}
