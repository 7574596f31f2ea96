use serde::{Deserialize, Serialize};

use crate::{
    rows::ProgressRow,
    util::{UNKNOWN_PROJECT, fallback_id, fallback_text, timestamp_millis},
};

/// One published project update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub id: String,
    pub title: String,
    pub project_title: String,
    pub published_at: String,
    pub timeline_status: String,
    pub budget_status: String,
}

/// Project progress feed: published updates only, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressView {
    pub items: Vec<ProgressItem>,
}

/// Builds the progress feed; rows without a `published_at` are drafts
/// and stay hidden.
#[must_use]
pub fn build_progress_view(updates: &[ProgressRow]) -> ProgressView {
    let mut items: Vec<ProgressItem> = updates
        .iter()
        .filter(|row| !row.published_at.trim().is_empty())
        .map(|row| ProgressItem {
            id: fallback_id(&row.id, "update"),
            title: fallback_text(&row.title, "Untitled update"),
            project_title: fallback_text(&row.project_title, UNKNOWN_PROJECT),
            published_at: row.published_at.clone(),
            timeline_status: row.timeline_status.trim().to_string(),
            budget_status: row.budget_status.trim().to_string(),
        })
        .collect();

    items.sort_by_key(|item| std::cmp::Reverse(timestamp_millis(&item.published_at)));

    ProgressView { items }
}
