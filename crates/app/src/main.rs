//! Operator reporter for the brickfund engine.
//!
//! Reads a JSON snapshot of already-exported rows (the same shapes the
//! web routing layer feeds to the engine) and prints the requested
//! dashboard view as JSON. Useful for support: reproduce exactly what
//! an investor's dashboard shows from a data export, without the site.

use std::error::Error;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use engine::rows::{
    AccountRow, DistributionRow, DocumentRow, InvestmentRow, KycRow, ProgressRow, TransactionRow,
};

mod settings;

#[derive(Parser, Debug)]
#[command(name = "brickfund")]
#[command(about = "Render dashboard views from an exported row snapshot")]
struct Cli {
    /// Path to the snapshot JSON file (also read from settings/env).
    #[arg(long, env = "BRICKFUND_SNAPSHOT")]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline totals.
    Summary,
    /// Wallet snapshot derived from the summary.
    Wallet,
    /// Settled positions, largest first.
    Portfolio,
    /// Investments list.
    Investments,
    /// Payout events.
    Distributions,
    /// Wallet ledger.
    Transactions,
    /// Document shelf.
    Documents,
    /// Published progress updates.
    Progress,
    /// Identity-verification widget.
    Kyc,
    /// Profile display record.
    Profile,
}

/// Exported rows, one optional array/object per concern.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    investments: Vec<InvestmentRow>,
    #[serde(default)]
    distributions: Vec<DistributionRow>,
    #[serde(default)]
    transactions: Vec<TransactionRow>,
    #[serde(default)]
    documents: Vec<DocumentRow>,
    #[serde(default)]
    progress_updates: Vec<ProgressRow>,
    #[serde(default)]
    kyc: KycRow,
    #[serde(default)]
    account: AccountRow,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = settings::Settings::new()?;
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "brickfund={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let Some(path) = cli.snapshot.or(settings.snapshot) else {
        return Err("no snapshot path: pass --snapshot or set it in settings.toml".into());
    };

    tracing::info!(path = %path, "loading snapshot");
    let raw = std::fs::read_to_string(&path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;

    let rendered = match cli.command {
        Command::Summary => to_json(&engine::build_dashboard_summary(
            &snapshot.investments,
            &snapshot.distributions,
        ))?,
        Command::Wallet => {
            let summary =
                engine::build_dashboard_summary(&snapshot.investments, &snapshot.distributions);
            to_json(&engine::build_wallet_snapshot(&summary))?
        }
        Command::Portfolio => to_json(&engine::build_portfolio_view(&snapshot.investments))?,
        Command::Investments => to_json(&engine::build_investments_view(&snapshot.investments))?,
        Command::Distributions => {
            to_json(&engine::build_distributions_view(&snapshot.distributions))?
        }
        Command::Transactions => to_json(&engine::build_transactions_view(&snapshot.transactions))?,
        Command::Documents => to_json(&engine::build_documents_view(&snapshot.documents))?,
        Command::Progress => to_json(&engine::build_progress_view(&snapshot.progress_updates))?,
        Command::Kyc => to_json(&engine::build_kyc_view(&snapshot.kyc))?,
        Command::Profile => to_json(&engine::build_profile_view(&snapshot.account))?,
    };

    println!("{rendered}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, Box<dyn Error + Send + Sync>> {
    Ok(serde_json::to_string_pretty(value)?)
}
