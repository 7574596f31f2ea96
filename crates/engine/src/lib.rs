//! Domain core of the brickfund crowdfunding platform.
//!
//! The engine is a set of small, independent, pure functions over rows
//! the caller has already fetched and shaped (see [`rows`]): form
//! validators that resolve to a uniform [`FormOutcome`], dashboard
//! aggregators that reduce rows to view models, and access evaluators
//! for the admin console. The only side effects are the injected
//! provider capabilities ([`AuthProvider`], [`CheckoutProvider`]) the
//! validators await; the engine itself performs no I/O, so every call
//! is idempotent and trivially thread-safe.

pub use access::{AccessDecision, UserContext, evaluate_admin_access, evaluate_dashboard_access};
pub use auth::{
    AuthProvider, LoginSubmission, NewAccount, RegisterSubmission, SignUpReceipt, submit_login,
    submit_register,
};
pub use checkout::{
    CheckoutProvider, CheckoutSession, CheckoutSubmission, InvestmentLimits, submit_checkout,
};
pub use currency::Currency;
pub use dashboard::{
    DashboardSummary, DistributionItem, DistributionsView, DocumentItem, DocumentsView,
    InvestmentItem, InvestmentsView, KycAction, KycView, PortfolioItem, PortfolioView,
    ProgressItem, ProgressView, ProjectExposure, TransactionItem, TransactionsView,
    WalletSnapshot, build_dashboard_summary, build_distributions_view, build_documents_view,
    build_investments_view, build_kyc_view, build_portfolio_view, build_progress_view,
    build_project_exposure, build_transactions_view, build_wallet_snapshot,
};
pub use error::EngineError;
pub use form::{FormOutcome, ProviderError};
pub use money::MoneyCents;
pub use profile::{ProfileView, build_profile_view};
pub use redirect::{dashboard_path, investments_path, sanitize_next};
pub use status::{DistributionStatus, InvestmentStatus, KycState, LedgerKind, UserRole};

mod access;
mod auth;
mod checkout;
mod currency;
mod dashboard;
mod error;
mod form;
mod money;
mod profile;
mod redirect;
pub mod rows;
mod status;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
