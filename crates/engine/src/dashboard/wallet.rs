use serde::{Deserialize, Serialize};

use crate::MoneyCents;

use super::DashboardSummary;

/// Wallet widget derived from the dashboard summary totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub committed_capital_minor: MoneyCents,
    pub realized_returns_minor: MoneyCents,
    pub net_exposure_minor: MoneyCents,
    /// `realized / committed * 100`; `0` when nothing is committed.
    pub return_yield_pct: f64,
}

/// Derives the wallet snapshot from already-aggregated summary totals.
#[must_use]
pub fn build_wallet_snapshot(summary: &DashboardSummary) -> WalletSnapshot {
    let committed = summary.total_invested_minor;
    let realized = summary.total_returned_minor;

    let return_yield_pct = if committed.is_zero() {
        0.0
    } else {
        realized.cents() as f64 / committed.cents() as f64 * 100.0
    };

    WalletSnapshot {
        committed_capital_minor: committed,
        realized_returns_minor: realized,
        net_exposure_minor: committed.saturating_sub(realized),
        return_yield_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_committed_never_divides() {
        let summary = DashboardSummary {
            total_returned_minor: MoneyCents::new(500_00),
            ..DashboardSummary::default()
        };
        let wallet = build_wallet_snapshot(&summary);
        assert_eq!(wallet.return_yield_pct, 0.0);
        assert_eq!(wallet.net_exposure_minor, MoneyCents::new(-500_00));
    }

    #[test]
    fn yield_is_percentage_of_committed() {
        let summary = DashboardSummary {
            active_investments: 2,
            total_invested_minor: MoneyCents::new(1_000_00),
            total_returned_minor: MoneyCents::new(250_00),
            net_exposure_minor: MoneyCents::new(750_00),
        };
        let wallet = build_wallet_snapshot(&summary);
        assert_eq!(wallet.return_yield_pct, 25.0);
        assert_eq!(wallet.net_exposure_minor, MoneyCents::new(750_00));
    }
}
