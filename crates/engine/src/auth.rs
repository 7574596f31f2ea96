//! Login and register submission validation.
//!
//! Both validators share one shape: check the fields, call the injected
//! auth provider, surface its failure message verbatim, and sanitize
//! the post-auth `next` target. The provider (the hosted auth service
//! in production) is a trait so tests can stub it.

use unicode_normalization::UnicodeNormalization;

use crate::{
    ProviderError,
    form::{FieldErrors, FormOutcome},
    redirect::{dashboard_path, sanitize_next},
};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Minimum accepted full-name length (after trimming).
pub const MIN_NAME_LEN: usize = 2;

/// Profile fields forwarded to the provider on register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-up.
///
/// `session_created` is `false` when the provider requires email
/// confirmation before the first session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignUpReceipt {
    pub session_created: bool,
}

/// Injected auth capability.
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), ProviderError>;
    async fn sign_up(&self, account: NewAccount) -> Result<SignUpReceipt, ProviderError>;
}

/// Raw login form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
    pub locale: String,
    pub next: Option<String>,
}

/// Raw register form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterSubmission {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub locale: String,
    pub next: Option<String>,
}

const INVALID_MESSAGE: &str = "Please fix the errors below";
const CONFIRM_EMAIL_MESSAGE: &str = "Check your inbox to confirm your email address";

/// Minimal structural email check: one `@`, non-empty local part, a dot
/// in the domain, no whitespace. Deliverability is the provider's
/// problem.
fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// NFC-normalized, whitespace-collapsed full name.
fn normalize_full_name(raw: &str) -> String {
    raw.trim()
        .nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validates a login submission and signs the user in via `provider`.
///
/// On success the `next` target is sanitized with the same rule as
/// checkout redirects, falling back to `/<locale>/dashboard`.
pub async fn submit_login(provider: &impl AuthProvider, submission: &LoginSubmission) -> FormOutcome {
    let mut errors = FieldErrors::default();
    if !is_valid_email(&submission.email) {
        errors.push("email", "Enter a valid email address");
    }
    if submission.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("password", "Password must be at least 8 characters");
    }
    if !errors.is_empty() {
        return errors.into_outcome(INVALID_MESSAGE);
    }

    if let Err(err) = provider
        .sign_in(submission.email.trim(), &submission.password)
        .await
    {
        return FormOutcome::rejected(err.0);
    }

    let fallback = dashboard_path(&submission.locale);
    FormOutcome::redirect(sanitize_next(
        &submission.locale,
        submission.next.as_deref(),
        &fallback,
    ))
}

/// Validates a register submission and creates the account via
/// `provider`.
///
/// When the provider reports no session (email-confirmation flow) the
/// outcome is `ok` with an informational message and no redirect.
pub async fn submit_register(
    provider: &impl AuthProvider,
    submission: &RegisterSubmission,
) -> FormOutcome {
    let full_name = normalize_full_name(&submission.full_name);

    let mut errors = FieldErrors::default();
    if full_name.chars().count() < MIN_NAME_LEN {
        errors.push("full_name", "Name must be at least 2 characters");
    }
    if !is_valid_email(&submission.email) {
        errors.push("email", "Enter a valid email address");
    }
    if submission.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("password", "Password must be at least 8 characters");
    }
    if submission.password != submission.confirm_password {
        errors.push("confirm_password", "Passwords do not match");
    }
    if !errors.is_empty() {
        return errors.into_outcome(INVALID_MESSAGE);
    }

    let receipt = match provider
        .sign_up(NewAccount {
            full_name,
            email: submission.email.trim().to_string(),
            password: submission.password.clone(),
        })
        .await
    {
        Ok(receipt) => receipt,
        Err(err) => return FormOutcome::rejected(err.0),
    };

    if !receipt.session_created {
        return FormOutcome::accepted(CONFIRM_EMAIL_MESSAGE);
    }

    let fallback = dashboard_path(&submission.locale);
    FormOutcome::redirect(sanitize_next(
        &submission.locale,
        submission.next.as_deref(),
        &fallback,
    ))
}
