//! Investor profile display record.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{Currency, KycState, rows::AccountRow};

/// Derived display record for the account page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub full_name: String,
    pub email: String,
    pub locale: String,
    pub currency: Currency,
    pub kyc_status: KycState,
}

/// Builds the profile view from a raw account row.
///
/// The display name is NFC-normalized with collapsed whitespace;
/// blank fields fall back to neutral defaults rather than failing.
#[must_use]
pub fn build_profile_view(row: &AccountRow) -> ProfileView {
    let full_name = row
        .full_name
        .trim()
        .nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let full_name = if full_name.is_empty() {
        "Investor".to_string()
    } else {
        full_name
    };

    let locale = row.locale.trim();
    let locale = if locale.is_empty() { "en" } else { locale };

    ProfileView {
        full_name,
        email: row.email.trim().to_string(),
        locale: locale.to_string(),
        currency: Currency::try_from(row.currency.as_str()).unwrap_or_default(),
        kyc_status: KycState::parse(&row.kyc_status),
    }
}
