//! Dashboard view aggregators.
//!
//! One pure function per dashboard widget. Each follows the same
//! template over caller-shaped rows: filter on a documented status set,
//! normalize blank fields to safe defaults, sort newest first (stable),
//! and reduce to named totals. Aggregators never fail: a malformed row
//! is defaulted, not rejected, because the dashboard must always render
//! something.

mod distributions;
mod documents;
mod exposure;
mod investments;
mod kyc;
mod portfolio;
mod progress;
mod summary;
mod transactions;
mod wallet;

pub use distributions::{DistributionItem, DistributionsView, build_distributions_view};
pub use documents::{DocumentItem, DocumentsView, build_documents_view};
pub use exposure::{ProjectExposure, build_project_exposure};
pub use investments::{InvestmentItem, InvestmentsView, build_investments_view};
pub use kyc::{KycAction, KycView, build_kyc_view};
pub use portfolio::{PortfolioItem, PortfolioView, build_portfolio_view};
pub use progress::{ProgressItem, ProgressView, build_progress_view};
pub use summary::{DashboardSummary, build_dashboard_summary};
pub use transactions::{TransactionItem, TransactionsView, build_transactions_view};
pub use wallet::{WalletSnapshot, build_wallet_snapshot};
