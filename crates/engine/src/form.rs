//! Uniform outcome record for form submissions.
//!
//! Every validator (checkout, login, register) resolves to the same
//! shape so page handlers can render it without caring which form it
//! came from. Exactly three failure classes exist:
//!
//! 1. field validation: per-field `errors` (first message per field)
//!    plus a generic `message`
//! 2. reference lookup (unknown project slug): `message` only
//! 3. provider failure: the provider's message passed through verbatim

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by an injected provider capability.
///
/// The message is surfaced to the user verbatim, never wrapped or
/// translated.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Discriminated result of a form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// First error message per field; `BTreeMap` keeps output order
    /// deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl FormOutcome {
    /// Success with a sanitized redirect target.
    #[must_use]
    pub fn redirect(to: impl Into<String>) -> Self {
        Self {
            ok: true,
            redirect_to: Some(to.into()),
            ..Self::default()
        }
    }

    /// Success with an informational message and no redirect (e.g. the
    /// email-confirmation register flow).
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Reference-lookup or provider failure: message only.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Field-validation failure.
    #[must_use]
    pub fn invalid(message: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            errors,
            ..Self::default()
        }
    }
}

/// Collects the first error per field, in submission-shape order.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub(crate) fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_outcome(self, message: &str) -> FormOutcome {
        FormOutcome::invalid(message, self.errors)
    }
}
