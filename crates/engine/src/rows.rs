//! Raw input rows at the engine boundary.
//!
//! The route/page layer fetches rows from the hosted store and shapes
//! them into these strict records before calling an aggregator. The
//! engine never branches on "array or object" ambiguity: that is
//! resolved by the caller. Statuses and timestamps stay raw strings
//! here because the store can hold values the enums do not know about;
//! aggregators coerce them with the lenient parsers and documented
//! fallbacks instead of failing.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// One investment as stored, joined with its project title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount_minor: MoneyCents,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_title: String,
    /// RFC3339 or empty; empty sorts as epoch 0.
    #[serde(default)]
    pub created_at: String,
}

/// One payout event against an investment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub net_amount_minor: MoneyCents,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub created_at: String,
}

/// One wallet ledger entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount_minor: MoneyCents,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub created_at: String,
}

/// One investor document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
}

/// One project progress update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project_title: String,
    /// Empty means unpublished; such rows are dropped from the view.
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub timeline_status: String,
    #[serde(default)]
    pub budget_status: String,
}

/// Raw identity-verification state for one investor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycRow {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub verified_at: String,
}

/// Raw account record backing the profile view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub kyc_status: String,
}
