//! Shared outcome handling for the sign-in and sign-up pages.

#[cfg(test)]
#[path = "auth_feedback_test.rs"]
mod auth_feedback_test;

use leptos::prelude::*;

use crate::state::auth::{AuthOutcome, Destination};
use crate::state::toast::ToastKind;
use crate::util::validation::ValidationErrors;

/// Page-specific copy for each outcome.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FeedbackCopy {
    pub success: &'static str,
    pub invalid: &'static str,
}

pub(crate) const SIGN_IN_COPY: FeedbackCopy =
    FeedbackCopy { success: "Login Successful!", invalid: "Please correct the errors in the form." };

pub(crate) const SIGN_UP_COPY: FeedbackCopy = FeedbackCopy {
    success: "Sign Up Successful! Redirecting to your Dashboard...",
    invalid: "Please fix the errors before submitting.",
};

/// What the page should do after an auth attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Feedback {
    pub toast: (ToastKind, String),
    pub field_errors: ValidationErrors,
    pub navigate_to: Option<Destination>,
}

pub(crate) fn feedback_for(outcome: AuthOutcome, copy: FeedbackCopy) -> Feedback {
    match outcome {
        AuthOutcome::Success { redirect, .. } => Feedback {
            toast: (ToastKind::Success, copy.success.to_owned()),
            field_errors: ValidationErrors::new(),
            navigate_to: Some(redirect),
        },
        AuthOutcome::Invalid(errors) => Feedback {
            toast: (ToastKind::Error, copy.invalid.to_owned()),
            field_errors: errors,
            navigate_to: None,
        },
        AuthOutcome::Failed(err) => Feedback {
            toast: (ToastKind::Error, err.to_string()),
            field_errors: ValidationErrors::new(),
            navigate_to: None,
        },
    }
}

/// Inline message under a form field.
#[component]
pub(crate) fn FieldError(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="form__error" id=format!("{field}-error")>{message.to_owned()}</p> })
    }
}
