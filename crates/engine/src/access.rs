//! Role gates for the admin console and the investor dashboard.

use serde::{Deserialize, Serialize};

use crate::{UserRole, redirect::dashboard_path};

/// Authenticated user as seen by the access evaluators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub id: String,
    pub role: UserRole,
}

/// Decision returned by the access evaluators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum AccessDecision {
    Granted { user: UserContext },
    Redirect { redirect_to: String },
}

impl AccessDecision {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

fn login_redirect(locale: &str, next_path: &str) -> String {
    format!(
        "/{locale}/login?next={}",
        urlencoding::encode(next_path)
    )
}

/// Gate for the admin console.
///
/// No user sends the visitor to login with the intended destination
/// carried in an encoded `next` parameter; a user without an admin
/// role lands on the investor dashboard instead.
#[must_use]
pub fn evaluate_admin_access(
    locale: &str,
    user: Option<&UserContext>,
    next_path: Option<&str>,
) -> AccessDecision {
    let default_next = format!("/{locale}/admin/dashboard");
    let next_path = next_path.unwrap_or(&default_next);

    let Some(user) = user else {
        return AccessDecision::Redirect {
            redirect_to: login_redirect(locale, next_path),
        };
    };
    if !user.role.can_administer() {
        return AccessDecision::Redirect {
            redirect_to: dashboard_path(locale),
        };
    }
    AccessDecision::Granted { user: user.clone() }
}

/// Gate for the investor dashboard: any authenticated user passes.
#[must_use]
pub fn evaluate_dashboard_access(
    locale: &str,
    user: Option<&UserContext>,
    next_path: Option<&str>,
) -> AccessDecision {
    let default_next = dashboard_path(locale);
    let next_path = next_path.unwrap_or(&default_next);

    let Some(user) = user else {
        return AccessDecision::Redirect {
            redirect_to: login_redirect(locale, next_path),
        };
    };
    AccessDecision::Granted { user: user.clone() }
}
