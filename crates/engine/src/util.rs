//! Internal helpers shared by the dashboard aggregators.
//!
//! These utilities are **not** part of the public API. They centralize
//! the fallback and sorting conventions so every view treats malformed
//! rows the same way.

use chrono::DateTime;

/// Fallback id for a row with a blank id: `unknown-<entity>`.
pub(crate) fn fallback_id(raw: &str, entity: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("unknown-{entity}")
    } else {
        trimmed.to_string()
    }
}

/// Fallback for a blank display string.
pub(crate) fn fallback_text(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) const UNKNOWN_PROJECT: &str = "Unknown project";

/// Sort key for an RFC3339 timestamp string.
///
/// Empty or malformed timestamps sort as epoch 0, so they sink to the
/// bottom of a newest-first list instead of failing the whole view.
pub(crate) fn timestamp_millis(raw: &str) -> i64 {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_gets_entity_fallback() {
        assert_eq!(fallback_id("", "investment"), "unknown-investment");
        assert_eq!(fallback_id("  ", "document"), "unknown-document");
        assert_eq!(fallback_id("inv-1", "investment"), "inv-1");
    }

    #[test]
    fn malformed_timestamps_sort_as_epoch_zero() {
        assert_eq!(timestamp_millis(""), 0);
        assert_eq!(timestamp_millis("not-a-date"), 0);
        assert!(timestamp_millis("2024-03-01T12:00:00Z") > 0);
    }

    #[test]
    fn timestamp_honors_offsets() {
        let utc = timestamp_millis("2024-03-01T12:00:00Z");
        let sofia = timestamp_millis("2024-03-01T14:00:00+02:00");
        assert_eq!(utc, sofia);
    }
}
