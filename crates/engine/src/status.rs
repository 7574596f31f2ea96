//! Status primitives.
//!
//! Every status enum has a strict [`TryFrom<&str>`] for code that must
//! reject bad input, and the dashboard aggregators use the lenient
//! `parse` helpers instead: raw rows come from a hosted store and a row
//! with an unrecognized status must still render, it just never counts
//! toward any qualifying total.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Lifecycle status of an investment.
///
/// Created by checkout confirmation, advanced by payment/operational
/// events outside the engine. The engine only reads and classifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Reserved,
    PendingPayment,
    Active,
    Returning,
    Exited,
    Cancelled,
    Refunded,
}

impl InvestmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::PendingPayment => "pending_payment",
            Self::Active => "active",
            Self::Returning => "returning",
            Self::Exited => "exited",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }

    /// Lenient parse used by aggregators: `None` for unknown raw values.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::try_from(raw.trim()).ok()
    }

    /// Capital in this status counts as committed (summary, portfolio,
    /// project exposure).
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Active | Self::Returning | Self::Exited)
    }

    /// Counts toward the open-commitments figure of the investments list.
    #[must_use]
    pub fn is_open_commitment(self) -> bool {
        matches!(
            self,
            Self::Reserved | Self::PendingPayment | Self::Active | Self::Returning
        )
    }

    /// Hidden from the investments list entirely.
    #[must_use]
    pub fn is_excluded_from_list(self) -> bool {
        matches!(self, Self::Cancelled | Self::Refunded)
    }
}

impl TryFrom<&str> for InvestmentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "reserved" => Ok(Self::Reserved),
            "pending_payment" => Ok(Self::PendingPayment),
            "active" => Ok(Self::Active),
            "returning" => Ok(Self::Returning),
            "exited" => Ok(Self::Exited),
            "cancelled" => Ok(Self::Cancelled),
            "refunded" => Ok(Self::Refunded),
            other => Err(EngineError::InvalidStatus(format!(
                "invalid investment status: {other}"
            ))),
        }
    }
}

/// Status of a payout event against an investment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStatus {
    Pending,
    Processing,
    Paid,
    Cancelled,
}

impl DistributionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Lenient parse used by aggregators: `None` for unknown raw values.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::try_from(raw.trim()).ok()
    }

    /// Queued for payment but not yet settled.
    #[must_use]
    pub fn is_pending_payout(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl TryFrom<&str> for DistributionStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(EngineError::InvalidStatus(format!(
                "invalid distribution status: {other}"
            ))),
        }
    }
}

/// Direction of a wallet ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    Credit,
    Debit,
}

impl LedgerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Lenient parse used by aggregators: `None` for unknown raw values.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::try_from(raw.trim()).ok()
    }
}

impl TryFrom<&str> for LedgerKind {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(EngineError::InvalidStatus(format!(
                "invalid ledger kind: {other}"
            ))),
        }
    }
}

/// Identity-verification state of an investor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycState {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
    Expired,
}

impl KycState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }

    /// Lenient parse: unknown raw values coerce to `NotStarted`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_from(raw.trim()).unwrap_or_default()
    }
}

impl TryFrom<&str> for KycState {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "not_started" => Ok(Self::NotStarted),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            other => Err(EngineError::InvalidStatus(format!(
                "invalid kyc status: {other}"
            ))),
        }
    }
}

/// Platform role carried by an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ProjectOwner,
    #[default]
    Investor,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectOwner => "project_owner",
            Self::Investor => "investor",
        }
    }

    /// Lenient parse: unknown raw values coerce to `Investor` (least
    /// privilege).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_from(raw.trim()).unwrap_or_default()
    }

    /// Access to the admin console.
    #[must_use]
    pub fn can_administer(self) -> bool {
        matches!(self, Self::Admin | Self::ProjectOwner)
    }
}

impl TryFrom<&str> for UserRole {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "admin" => Ok(Self::Admin),
            "project_owner" => Ok(Self::ProjectOwner),
            "investor" => Ok(Self::Investor),
            other => Err(EngineError::InvalidRole(format!(
                "invalid user role: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn investment_status_sets_do_not_overlap_on_exclusion() {
        for status in [
            InvestmentStatus::Reserved,
            InvestmentStatus::PendingPayment,
            InvestmentStatus::Active,
            InvestmentStatus::Returning,
            InvestmentStatus::Exited,
        ] {
            assert!(!status.is_excluded_from_list());
        }
        assert!(InvestmentStatus::Cancelled.is_excluded_from_list());
        assert!(InvestmentStatus::Refunded.is_excluded_from_list());
    }

    #[test]
    fn settled_set_matches_qualifying_statuses() {
        assert!(InvestmentStatus::Active.is_settled());
        assert!(InvestmentStatus::Returning.is_settled());
        assert!(InvestmentStatus::Exited.is_settled());
        assert!(!InvestmentStatus::Reserved.is_settled());
        assert!(!InvestmentStatus::Cancelled.is_settled());
    }

    #[test]
    fn lenient_parses_fall_back() {
        assert_eq!(InvestmentStatus::parse("bogus"), None);
        assert_eq!(KycState::parse("bogus"), KycState::NotStarted);
        assert_eq!(UserRole::parse("superuser"), UserRole::Investor);
    }

    #[test]
    fn strict_parse_round_trips() {
        for status in [
            InvestmentStatus::Reserved,
            InvestmentStatus::PendingPayment,
            InvestmentStatus::Active,
            InvestmentStatus::Returning,
            InvestmentStatus::Exited,
            InvestmentStatus::Cancelled,
            InvestmentStatus::Refunded,
        ] {
            assert_eq!(InvestmentStatus::try_from(status.as_str()), Ok(status));
        }
    }
}
