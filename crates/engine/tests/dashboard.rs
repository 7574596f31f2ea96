use engine::{
    MoneyCents, build_dashboard_summary, build_distributions_view, build_investments_view,
    build_portfolio_view, build_project_exposure, build_transactions_view, build_wallet_snapshot,
    rows::{DistributionRow, InvestmentRow, TransactionRow},
};

fn investment(id: &str, status: &str, cents: i64, created_at: &str) -> InvestmentRow {
    InvestmentRow {
        id: id.to_string(),
        amount_minor: MoneyCents::new(cents),
        status: status.to_string(),
        project_id: format!("prj-{id}"),
        project_title: format!("Project {id}"),
        created_at: created_at.to_string(),
    }
}

fn distribution(id: &str, status: &str, cents: i64) -> DistributionRow {
    DistributionRow {
        id: id.to_string(),
        net_amount_minor: MoneyCents::new(cents),
        status: status.to_string(),
        project_title: format!("Project {id}"),
        created_at: String::new(),
    }
}

fn ledger(id: &str, kind: &str, cents: i64, created_at: &str) -> TransactionRow {
    TransactionRow {
        id: id.to_string(),
        amount_minor: MoneyCents::new(cents),
        kind: kind.to_string(),
        label: String::new(),
        source: "stripe".to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn excluded_investments_never_reach_items_or_totals() {
    let rows = vec![
        investment("keep-1", "active", 100_00, "2024-01-01T00:00:00Z"),
        investment("drop-1", "cancelled", 400_00, "2024-01-02T00:00:00Z"),
        investment("keep-2", "reserved", 50_00, "2024-01-03T00:00:00Z"),
        investment("drop-2", "refunded", 300_00, "2024-01-04T00:00:00Z"),
    ];

    let view = build_investments_view(&rows);
    assert!(view.items.iter().all(|i| !i.id.starts_with("drop")));
    assert_eq!(view.total_committed_minor, MoneyCents::new(150_00));
    assert_eq!(view.open_commitments, 2);
}

#[test]
fn distribution_totals_bounded_by_non_cancelled_sum() {
    let rows = vec![
        distribution("d1", "paid", 40_00),
        distribution("d2", "pending", 25_00),
        distribution("d3", "processing", 10_00),
        distribution("d4", "cancelled", 500_00),
    ];

    let view = build_distributions_view(&rows);
    let non_cancelled: i64 = rows
        .iter()
        .filter(|r| r.status != "cancelled")
        .map(|r| r.net_amount_minor.cents())
        .sum();

    // All visible rows are either paid or queued, so the split is exact.
    assert_eq!(
        view.total_paid_minor.cents() + view.pending_payouts_minor.cents(),
        non_cancelled
    );
}

#[test]
fn empty_dashboard_is_the_zero_summary() {
    let summary = build_dashboard_summary(&[], &[]);
    assert_eq!(summary.active_investments, 0);
    assert_eq!(summary.total_invested_minor, MoneyCents::ZERO);
    assert_eq!(summary.total_returned_minor, MoneyCents::ZERO);
    assert_eq!(summary.net_exposure_minor, MoneyCents::ZERO);
}

#[test]
fn wallet_yield_never_divides_by_zero() {
    for returned in [0, 1, 123_456] {
        let summary = build_dashboard_summary(&[], &[distribution("d", "paid", returned)]);
        let wallet = build_wallet_snapshot(&summary);
        assert_eq!(wallet.return_yield_pct, 0.0);
    }
}

#[test]
fn wallet_mirrors_summary_totals() {
    let summary = build_dashboard_summary(
        &[investment("i1", "active", 1_000_00, "")],
        &[distribution("d1", "paid", 100_00)],
    );
    let wallet = build_wallet_snapshot(&summary);
    assert_eq!(wallet.committed_capital_minor, summary.total_invested_minor);
    assert_eq!(wallet.realized_returns_minor, summary.total_returned_minor);
    assert_eq!(
        wallet.net_exposure_minor,
        summary.total_invested_minor - summary.total_returned_minor
    );
    assert_eq!(
        wallet.realized_returns_minor + wallet.net_exposure_minor,
        wallet.committed_capital_minor
    );
    assert_eq!(wallet.return_yield_pct, 10.0);
}

#[test]
fn extreme_amounts_clamp_instead_of_overflowing() {
    let rows = vec![
        investment("i1", "active", i64::MAX, ""),
        investment("i2", "active", 1, ""),
    ];

    let summary = build_dashboard_summary(&rows, &[]);
    assert_eq!(summary.active_investments, 2);
    assert_eq!(summary.total_invested_minor, MoneyCents::new(i64::MAX));
    assert_eq!(summary.net_exposure_minor, MoneyCents::new(i64::MAX));

    let wallet = build_wallet_snapshot(&summary);
    assert_eq!(wallet.committed_capital_minor, MoneyCents::new(i64::MAX));

    let view = build_investments_view(&rows);
    assert_eq!(view.total_committed_minor, MoneyCents::new(i64::MAX));

    let portfolio = build_portfolio_view(&rows);
    assert_eq!(portfolio.total_invested_minor, MoneyCents::new(i64::MAX));

    let exposure = build_project_exposure(&rows, &[]);
    assert_eq!(exposure.committed_capital_minor, MoneyCents::new(i64::MAX));
    assert_eq!(exposure.outstanding_capital_minor, MoneyCents::new(i64::MAX));

    // The same guard holds for payout and ledger totals.
    let distributions = vec![
        distribution("d1", "paid", i64::MAX),
        distribution("d2", "paid", 1),
    ];
    let view = build_distributions_view(&distributions);
    assert_eq!(view.total_paid_minor, MoneyCents::new(i64::MAX));

    let transactions = vec![
        ledger("t1", "credit", i64::MAX, ""),
        ledger("t2", "credit", 1, ""),
    ];
    let view = build_transactions_view(&transactions);
    assert_eq!(view.total_credits_minor, MoneyCents::new(i64::MAX));
}

#[test]
fn transactions_order_is_permutation_independent() {
    let rows = vec![
        ledger("t1", "credit", 10_00, "2024-01-05T00:00:00Z"),
        ledger("t2", "debit", 20_00, "2024-02-05T00:00:00Z"),
        ledger("t3", "credit", 30_00, "2024-03-05T00:00:00Z"),
        ledger("t4", "debit", 40_00, ""),
    ];

    let baseline = build_transactions_view(&rows);
    let permutations: Vec<Vec<TransactionRow>> = vec![
        vec![rows[3].clone(), rows[2].clone(), rows[1].clone(), rows[0].clone()],
        vec![rows[1].clone(), rows[3].clone(), rows[0].clone(), rows[2].clone()],
    ];

    for permuted in permutations {
        let view = build_transactions_view(&permuted);
        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        let expected: Vec<&str> = baseline.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn views_serialize_with_snake_case_wire_names() {
    let kyc = engine::build_kyc_view(&engine::rows::KycRow {
        status: "bogus".to_string(),
        verified_at: String::new(),
    });
    let value = serde_json::to_value(&kyc).unwrap();
    assert_eq!(value["status"], "not_started");
    assert_eq!(value["action"], "start_verification");
    assert_eq!(value["is_complete"], false);
    // Absent verified_at is omitted from the wire shape entirely.
    assert!(value.get("verified_at").is_none());

    let summary = build_dashboard_summary(&[investment("i1", "active", 100_00, "")], &[]);
    let value = serde_json::to_value(summary).unwrap();
    assert_eq!(value["active_investments"], 1);
    assert_eq!(value["total_invested_minor"], 100_00);
}

#[test]
fn exposure_subtraction_order_matches_portfolio_totals() {
    let investments = vec![
        investment("i1", "active", 800_00, ""),
        investment("i2", "exited", 200_00, ""),
        investment("i3", "cancelled", 999_00, ""),
    ];
    let distributions = vec![
        distribution("d1", "paid", 300_00),
        distribution("d2", "cancelled", 400_00),
    ];

    let exposure = build_project_exposure(&investments, &distributions);
    assert_eq!(exposure.committed_capital_minor, MoneyCents::new(1_000_00));
    assert_eq!(exposure.returned_capital_minor, MoneyCents::new(300_00));
    assert_eq!(exposure.outstanding_capital_minor, MoneyCents::new(700_00));

    // The portfolio over the same rows agrees on committed capital.
    let portfolio = build_portfolio_view(&investments);
    assert_eq!(
        portfolio.total_invested_minor,
        exposure.committed_capital_minor
    );
    assert_eq!(portfolio.active_positions, 2);
}
