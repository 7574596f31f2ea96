use serde::{Deserialize, Serialize};

use crate::{KycState, rows::KycRow};

/// Next step the dashboard should offer for identity verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycAction {
    None,
    StartVerification,
    ContinueVerification,
}

/// KYC widget state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycView {
    pub status: KycState,
    pub is_complete: bool,
    pub action: KycAction,
    /// Present only for approved investors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<String>,
}

/// Derives the KYC widget from the raw row.
///
/// Unknown raw statuses coerce to `not_started`, so a corrupted value
/// prompts the investor to start verification rather than hiding the
/// widget.
#[must_use]
pub fn build_kyc_view(row: &KycRow) -> KycView {
    let status = KycState::parse(&row.status);
    match status {
        KycState::Approved => {
            let verified_at = row.verified_at.trim();
            KycView {
                status,
                is_complete: true,
                action: KycAction::None,
                verified_at: (!verified_at.is_empty()).then(|| verified_at.to_string()),
            }
        }
        KycState::NotStarted => KycView {
            status,
            is_complete: false,
            action: KycAction::StartVerification,
            verified_at: None,
        },
        KycState::Pending | KycState::Rejected | KycState::Expired => KycView {
            status,
            is_complete: false,
            action: KycAction::ContinueVerification,
            verified_at: None,
        },
    }
}
