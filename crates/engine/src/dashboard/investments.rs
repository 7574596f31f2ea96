use serde::{Deserialize, Serialize};

use crate::{
    InvestmentStatus, MoneyCents,
    rows::InvestmentRow,
    util::{UNKNOWN_PROJECT, fallback_id, fallback_text, timestamp_millis},
};

/// One visible investment.
///
/// `status` is the canonical label for known statuses; a raw value the
/// engine does not recognize is kept as-is so the row still renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentItem {
    pub id: String,
    pub project_id: String,
    pub project_title: String,
    pub status: String,
    pub amount_minor: MoneyCents,
    pub created_at: String,
}

/// Investments list: everything except cancelled/refunded rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentsView {
    /// Count of rows in reserved/pending_payment/active/returning.
    pub open_commitments: usize,
    /// Sum over every visible row, open or not.
    pub total_committed_minor: MoneyCents,
    pub items: Vec<InvestmentItem>,
}

/// Builds the investments list, newest first.
#[must_use]
pub fn build_investments_view(investments: &[InvestmentRow]) -> InvestmentsView {
    let mut open_commitments = 0usize;
    let mut total_committed = MoneyCents::ZERO;

    let mut items: Vec<InvestmentItem> = Vec::with_capacity(investments.len());
    for row in investments {
        let status = InvestmentStatus::parse(&row.status);
        if status.is_some_and(|s| s.is_excluded_from_list()) {
            continue;
        }
        if status.is_some_and(|s| s.is_open_commitment()) {
            open_commitments += 1;
        }
        total_committed = total_committed.saturating_add(row.amount_minor);

        items.push(InvestmentItem {
            id: fallback_id(&row.id, "investment"),
            project_id: fallback_id(&row.project_id, "project"),
            project_title: fallback_text(&row.project_title, UNKNOWN_PROJECT),
            status: status.map_or_else(|| row.status.trim().to_string(), |s| s.as_str().to_string()),
            amount_minor: row.amount_minor,
            created_at: row.created_at.clone(),
        });
    }

    items.sort_by_key(|item| std::cmp::Reverse(timestamp_millis(&item.created_at)));

    InvestmentsView {
        open_commitments,
        total_committed_minor: total_committed,
        items,
    }
}
