use serde::{Deserialize, Serialize};

use crate::{
    DistributionStatus, MoneyCents,
    rows::DistributionRow,
    util::{UNKNOWN_PROJECT, fallback_id, fallback_text, timestamp_millis},
};

/// One visible payout event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionItem {
    pub id: String,
    pub project_title: String,
    pub status: String,
    pub net_amount_minor: MoneyCents,
    pub created_at: String,
}

/// Distributions list: everything except cancelled rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionsView {
    /// Sum of `paid` net amounts.
    pub total_paid_minor: MoneyCents,
    /// Sum of `pending` + `processing` net amounts.
    pub pending_payouts_minor: MoneyCents,
    pub items: Vec<DistributionItem>,
}

/// Builds the distributions list, newest first.
#[must_use]
pub fn build_distributions_view(distributions: &[DistributionRow]) -> DistributionsView {
    let mut total_paid = MoneyCents::ZERO;
    let mut pending_payouts = MoneyCents::ZERO;

    let mut items: Vec<DistributionItem> = Vec::with_capacity(distributions.len());
    for row in distributions {
        let status = DistributionStatus::parse(&row.status);
        if status == Some(DistributionStatus::Cancelled) {
            continue;
        }
        match status {
            Some(DistributionStatus::Paid) => {
                total_paid = total_paid.saturating_add(row.net_amount_minor);
            }
            Some(s) if s.is_pending_payout() => {
                pending_payouts = pending_payouts.saturating_add(row.net_amount_minor);
            }
            _ => {}
        }

        items.push(DistributionItem {
            id: fallback_id(&row.id, "distribution"),
            project_title: fallback_text(&row.project_title, UNKNOWN_PROJECT),
            status: status.map_or_else(|| row.status.trim().to_string(), |s| s.as_str().to_string()),
            net_amount_minor: row.net_amount_minor,
            created_at: row.created_at.clone(),
        });
    }

    items.sort_by_key(|item| std::cmp::Reverse(timestamp_millis(&item.created_at)));

    DistributionsView {
        total_paid_minor: total_paid,
        pending_payouts_minor: pending_payouts,
        items,
    }
}
