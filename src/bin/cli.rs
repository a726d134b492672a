use tally::{LedgerStore, LedgerBackend, Totals, TransactionType,
    transaction::{Amount, TransactionId},
    config::{AppConfig, StorageConfig}};

use std::path::PathBuf;
use anyhow::Context;
use colored::Colorize;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// TOML config file naming the storage directory and key
    #[clap(short, long, value_parser, conflicts_with = "data_dir")]
    config: Option<PathBuf>,

    /// Directory holding the ledger file, used when no config is given
    #[clap(short, long, value_parser, default_value = ".")]
    data_dir: PathBuf,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Record a new income or expense
    Add(Add),
    /// Remove a transaction by id
    Delete(Delete),
    /// List all transactions, newest first
    List,
    /// Show total income, total expenses and balance
    Summary,
}

#[derive(Args, Debug)]
struct Add {
    /// What the money was for
    #[clap(value_parser)]
    description: String,

    #[clap(value_parser, allow_hyphen_values = true)]
    amount: Amount,

    /// Either "income" or "expense"
    #[clap(short='t', long="type", value_parser, default_value = "income")]
    kind: TransactionType
}

#[derive(Args, Debug)]
struct Delete {
    #[clap(value_parser)]
    id: TransactionId
}

fn colored_amount(amount: Amount) -> colored::ColoredString {
    let text = format!("{:.2}", amount);
    if amount < 0.0 {
        text.bright_red()
    } else if amount > 0.0 {
        text.green()
    } else {
        text.normal()
    }
}

fn print_summary(totals: &Totals) {
    println!("{}: {}", "Income".bold(), format!("{:.2}", totals.total_income).green());
    println!("{}: {}", "Expenses".bold(), format!("{:.2}", totals.total_expenses).bright_red());
    println!("{}: {}", "Balance".bold(), colored_amount(totals.balance));
    if let Some(rate) = totals.savings_rate() {
        println!("{}: {:.1}%", "Saved".bold(), rate * 100.0);
    }
}

fn run<B: LedgerBackend>(store: &mut LedgerStore<B>, action: Subcommands) {
    match action {
        Subcommands::Add(add) => {
            let transaction = store.add_transaction(&add.description, add.amount, add.kind);
            println!("{}", transaction);
        },
        Subcommands::Delete(delete) => {
            store.delete_transaction(delete.id);
        },
        Subcommands::List => {
            if store.ledger().is_empty() {
                println!("No transactions recorded");
            }
            for t in store.transactions() {
                println!("{}", t);
            }
        },
        Subcommands::Summary => {
            let (income, expense) = store.ledger().count_by_type();
            println!("{} entries: {} income, {} expense", store.ledger().len(), income, expense);
            print_summary(&store.totals());
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    let storage = match &args.config {
        Some(path) => AppConfig::read(path)
            .with_context(|| format!("could not load {}", path.display()))?
            .storage,
        None => StorageConfig::in_directory(&args.data_dir)
    };
    log::debug!("using ledger '{}' in {}", storage.key, storage.directory.display());

    let mut store = LedgerStore::open(storage.open());
    run(&mut store, args.action);
    return Ok(());
}
