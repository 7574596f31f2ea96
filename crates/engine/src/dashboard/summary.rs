use serde::{Deserialize, Serialize};

use crate::{
    InvestmentStatus, MoneyCents,
    rows::{DistributionRow, InvestmentRow},
};

/// Headline figures at the top of the investor dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Count of investments in a settled status (active/returning/exited).
    pub active_investments: usize,
    /// Sum of settled investment amounts.
    pub total_invested_minor: MoneyCents,
    /// Sum of **all** distribution net amounts, regardless of status.
    pub total_returned_minor: MoneyCents,
    /// `total_invested - total_returned`, in that order.
    pub net_exposure_minor: MoneyCents,
}

/// Reduces raw investments and distributions to the dashboard headline.
#[must_use]
pub fn build_dashboard_summary(
    investments: &[InvestmentRow],
    distributions: &[DistributionRow],
) -> DashboardSummary {
    let mut active_investments = 0usize;
    let mut total_invested = MoneyCents::ZERO;
    for row in investments {
        let settled = InvestmentStatus::parse(&row.status).is_some_and(|s| s.is_settled());
        if settled {
            active_investments += 1;
            total_invested = total_invested.saturating_add(row.amount_minor);
        }
    }

    let mut total_returned = MoneyCents::ZERO;
    for row in distributions {
        total_returned = total_returned.saturating_add(row.net_amount_minor);
    }

    DashboardSummary {
        active_investments,
        total_invested_minor: total_invested,
        total_returned_minor: total_returned,
        net_exposure_minor: total_invested.saturating_sub(total_returned),
    }
}
