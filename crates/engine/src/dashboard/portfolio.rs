use serde::{Deserialize, Serialize};

use crate::{
    InvestmentStatus, MoneyCents,
    rows::InvestmentRow,
    util::{UNKNOWN_PROJECT, fallback_id, fallback_text},
};

/// One settled position, largest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub project_id: String,
    pub project_title: String,
    pub status: InvestmentStatus,
    pub amount_minor: MoneyCents,
    pub created_at: String,
}

/// Portfolio widget: settled positions sorted by amount descending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioView {
    pub active_positions: usize,
    pub total_invested_minor: MoneyCents,
    pub items: Vec<PortfolioItem>,
}

/// Builds the portfolio view from raw investment rows.
///
/// Unlike the date-sorted lists, portfolio items sort by amount
/// descending so the largest exposure leads.
#[must_use]
pub fn build_portfolio_view(investments: &[InvestmentRow]) -> PortfolioView {
    let mut items: Vec<PortfolioItem> = investments
        .iter()
        .filter_map(|row| {
            let status = InvestmentStatus::parse(&row.status)?;
            if !status.is_settled() {
                return None;
            }
            Some(PortfolioItem {
                id: fallback_id(&row.id, "investment"),
                project_id: fallback_id(&row.project_id, "project"),
                project_title: fallback_text(&row.project_title, UNKNOWN_PROJECT),
                status,
                amount_minor: row.amount_minor,
                created_at: row.created_at.clone(),
            })
        })
        .collect();

    items.sort_by_key(|item| std::cmp::Reverse(item.amount_minor));

    let total_invested = items
        .iter()
        .fold(MoneyCents::ZERO, |acc, item| {
            acc.saturating_add(item.amount_minor)
        });

    PortfolioView {
        active_positions: items.len(),
        total_invested_minor: total_invested,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, status: &str, cents: i64) -> InvestmentRow {
        InvestmentRow {
            id: id.to_string(),
            amount_minor: MoneyCents::new(cents),
            status: status.to_string(),
            ..InvestmentRow::default()
        }
    }

    #[test]
    fn sorts_by_amount_descending() {
        let view = build_portfolio_view(&[
            row("small", "active", 10_00),
            row("big", "exited", 500_00),
            row("skipped", "cancelled", 999_00),
            row("mid", "returning", 50_00),
        ]);

        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "mid", "small"]);
        assert_eq!(view.active_positions, 3);
        assert_eq!(view.total_invested_minor, MoneyCents::new(560_00));
    }

    #[test]
    fn blank_fields_get_defaults() {
        let view = build_portfolio_view(&[row("", "active", 10_00)]);
        assert_eq!(view.items[0].id, "unknown-investment");
        assert_eq!(view.items[0].project_title, "Unknown project");
    }
}
