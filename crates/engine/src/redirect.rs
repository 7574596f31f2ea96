//! Post-submit redirect sanitization.
//!
//! Redirect targets can come from query strings or from an external
//! checkout provider, so they are attacker-influenced. A target is kept
//! only if it is a same-site, locale-scoped path; anything else falls
//! back to a safe default.

/// Returns a safe redirect path for `candidate`.
///
/// Rules:
/// - must start with exactly one `/` (rejects `//host` protocol-relative
///   tricks and absolute URLs)
/// - must be prefixed by `/<locale>/`
///
/// Any violation yields `fallback`.
#[must_use]
pub fn sanitize_next(locale: &str, candidate: Option<&str>, fallback: &str) -> String {
    let Some(candidate) = candidate else {
        return fallback.to_string();
    };
    let candidate = candidate.trim();

    if !candidate.starts_with('/') || candidate.starts_with("//") {
        return fallback.to_string();
    }
    let prefix = format!("/{locale}/");
    if !candidate.starts_with(&prefix) {
        return fallback.to_string();
    }
    candidate.to_string()
}

/// Default post-login landing path.
#[must_use]
pub fn dashboard_path(locale: &str) -> String {
    format!("/{locale}/dashboard")
}

/// Default post-checkout landing path.
#[must_use]
pub fn investments_path(locale: &str) -> String {
    format!("/{locale}/dashboard/investments")
}
