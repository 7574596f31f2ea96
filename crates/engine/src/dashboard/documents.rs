use serde::{Deserialize, Serialize};

use crate::{
    rows::DocumentRow,
    util::{fallback_id, fallback_text, timestamp_millis},
};

/// One investor document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub category: String,
    pub created_at: String,
}

/// Document shelf: everything, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsView {
    pub items: Vec<DocumentItem>,
}

/// Builds the documents list. Nothing is filtered out.
#[must_use]
pub fn build_documents_view(documents: &[DocumentRow]) -> DocumentsView {
    let mut items: Vec<DocumentItem> = documents
        .iter()
        .map(|row| DocumentItem {
            id: fallback_id(&row.id, "document"),
            title: fallback_text(&row.title, "Untitled document"),
            file_name: row.file_name.trim().to_string(),
            category: row.category.trim().to_string(),
            created_at: row.created_at.clone(),
        })
        .collect();

    items.sort_by_key(|item| std::cmp::Reverse(timestamp_millis(&item.created_at)));

    DocumentsView { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_newest_first_with_fallbacks() {
        let view = build_documents_view(&[
            DocumentRow {
                id: String::new(),
                title: String::new(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                ..DocumentRow::default()
            },
            DocumentRow {
                id: "doc-2".to_string(),
                title: "Subscription agreement".to_string(),
                created_at: "2024-06-01T00:00:00Z".to_string(),
                ..DocumentRow::default()
            },
        ]);

        assert_eq!(view.items[0].id, "doc-2");
        assert_eq!(view.items[1].id, "unknown-document");
        assert_eq!(view.items[1].title, "Untitled document");
    }
}
