use serde::{Deserialize, Serialize};

use crate::{
    LedgerKind, MoneyCents,
    rows::TransactionRow,
    util::{fallback_id, timestamp_millis},
};

/// One wallet ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub source: String,
    pub amount_minor: MoneyCents,
    pub created_at: String,
}

/// Wallet ledger: every entry, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsView {
    pub total_credits_minor: MoneyCents,
    pub total_debits_minor: MoneyCents,
    pub items: Vec<TransactionItem>,
}

/// Builds the ledger view. Nothing is filtered out; entries with an
/// unknown kind stay listed but count toward neither total.
#[must_use]
pub fn build_transactions_view(transactions: &[TransactionRow]) -> TransactionsView {
    let mut total_credits = MoneyCents::ZERO;
    let mut total_debits = MoneyCents::ZERO;

    let mut items: Vec<TransactionItem> = Vec::with_capacity(transactions.len());
    for row in transactions {
        let kind = LedgerKind::parse(&row.kind);
        match kind {
            Some(LedgerKind::Credit) => {
                total_credits = total_credits.saturating_add(row.amount_minor);
            }
            Some(LedgerKind::Debit) => {
                total_debits = total_debits.saturating_add(row.amount_minor);
            }
            None => {}
        }

        items.push(TransactionItem {
            id: fallback_id(&row.id, "transaction"),
            kind: kind.map_or_else(|| row.kind.trim().to_string(), |k| k.as_str().to_string()),
            label: row.label.trim().to_string(),
            source: row.source.trim().to_string(),
            amount_minor: row.amount_minor,
            created_at: row.created_at.clone(),
        });
    }

    items.sort_by_key(|item| std::cmp::Reverse(timestamp_millis(&item.created_at)));

    TransactionsView {
        total_credits_minor: total_credits,
        total_debits_minor: total_debits,
        items,
    }
}
