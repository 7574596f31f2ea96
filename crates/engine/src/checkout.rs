//! Investment checkout validation.
//!
//! Validates a proposed investment against the project's limits and
//! hands the sanitized submission to an injected checkout provider.
//! The provider (a Stripe-backed service in production) is a trait so
//! tests can stub it without any network mocking.

use crate::{
    MoneyCents, ProviderError,
    form::{FieldErrors, FormOutcome},
    redirect::{investments_path, sanitize_next},
};

/// Per-project investment bounds, resolved by slug in the data layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestmentLimits {
    pub min_minor: MoneyCents,
    pub max_minor: MoneyCents,
}

/// Session created by the checkout provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

/// Injected checkout capability.
pub trait CheckoutProvider {
    async fn create_session(
        &self,
        amount: MoneyCents,
        locale: &str,
        slug: &str,
    ) -> Result<CheckoutSession, ProviderError>;
}

/// Raw checkout form submission; `amount` is unparsed user input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutSubmission {
    pub amount: String,
    pub slug: String,
    pub locale: String,
}

const INVALID_MESSAGE: &str = "Please fix the errors below";

/// Validates an investment submission and creates a checkout session.
///
/// `limits` is the project lookup result; `None` means the slug did not
/// resolve. On provider success the returned checkout URL is sanitized:
/// it must be a same-site path under `/<locale>/`, otherwise the safe
/// default `/<locale>/dashboard/investments` is used.
pub async fn submit_checkout(
    provider: &impl CheckoutProvider,
    limits: Option<InvestmentLimits>,
    submission: &CheckoutSubmission,
) -> FormOutcome {
    let amount = match submission.amount.parse::<MoneyCents>() {
        Ok(amount) if amount.is_positive() => amount,
        _ => {
            let mut errors = FieldErrors::default();
            errors.push("amount", "must be a positive number");
            return errors.into_outcome(INVALID_MESSAGE);
        }
    };

    let Some(limits) = limits else {
        return FormOutcome::rejected("Project reference is missing");
    };

    if amount < limits.min_minor {
        let mut errors = FieldErrors::default();
        errors.push(
            "amount",
            format!("Minimum investment is {}", limits.min_minor.major_rounded()),
        );
        return errors.into_outcome(INVALID_MESSAGE);
    }
    if amount > limits.max_minor {
        let mut errors = FieldErrors::default();
        errors.push(
            "amount",
            format!("Maximum investment is {}", limits.max_minor.major_rounded()),
        );
        return errors.into_outcome(INVALID_MESSAGE);
    }

    let session = match provider
        .create_session(amount, &submission.locale, &submission.slug)
        .await
    {
        Ok(session) => session,
        Err(err) => return FormOutcome::rejected(err.0),
    };

    let fallback = investments_path(&submission.locale);
    let target = sanitize_next(&submission.locale, Some(&session.checkout_url), &fallback);
    if target != session.checkout_url {
        tracing::warn!(
            slug = %submission.slug,
            "checkout provider returned an off-site redirect; using fallback"
        );
    }
    FormOutcome::redirect(target)
}
