use serde::{Deserialize, Serialize};

use crate::{
    DistributionStatus, InvestmentStatus, MoneyCents,
    rows::{DistributionRow, InvestmentRow},
};

/// Capital position against a single project.
///
/// Callers scope the rows to one project before calling; the engine
/// does not group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectExposure {
    /// Sum of settled investment amounts.
    pub committed_capital_minor: MoneyCents,
    /// Sum of `paid` distribution net amounts.
    pub returned_capital_minor: MoneyCents,
    /// Always `committed - returned`, never any other subtraction order.
    pub outstanding_capital_minor: MoneyCents,
}

/// Reduces one project's rows to its capital exposure.
#[must_use]
pub fn build_project_exposure(
    investments: &[InvestmentRow],
    distributions: &[DistributionRow],
) -> ProjectExposure {
    let committed = investments
        .iter()
        .filter(|row| InvestmentStatus::parse(&row.status).is_some_and(|s| s.is_settled()))
        .fold(MoneyCents::ZERO, |acc, row| {
            acc.saturating_add(row.amount_minor)
        });

    let returned = distributions
        .iter()
        .filter(|row| DistributionStatus::parse(&row.status) == Some(DistributionStatus::Paid))
        .fold(MoneyCents::ZERO, |acc, row| {
            acc.saturating_add(row.net_amount_minor)
        });

    ProjectExposure {
        committed_capital_minor: committed,
        returned_capital_minor: returned,
        outstanding_capital_minor: committed.saturating_sub(returned),
    }
}
