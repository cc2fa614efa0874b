use anyhow::Result;

use crate::models::booking_models::{BookingField, BookingRequest, ValidationErrors};
use crate::utils::validation_utils::validate;
use crate::utils::whatsapp_utils::{build_chat_link, compose_booking_message};

/// Hands a finished deep link to the host environment. The site opens it
/// in a new browsing context; tests capture it instead.
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the mapping carries every failing field.
    Invalid(ValidationErrors),
    /// The deep link was built and handed to the opener.
    LinkOpened(String),
}

/// One visit to the booking form. Edits and submits produce a new session
/// value; nothing outlives the visit and nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    request: BookingRequest,
    errors: ValidationErrors,
}

impl FormSession {
    pub fn new() -> FormSession {
        FormSession::default()
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    /// Errors from the most recent submit attempt, minus any cleared by
    /// later edits.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Applies one field edit. Editing a field clears that field's error
    /// immediately rather than waiting for the next submit; other fields
    /// and their errors are untouched.
    pub fn edit(self, field: BookingField, value: &str) -> FormSession {
        FormSession {
            request: self.request.with_field(field, value),
            errors: self.errors.without(field),
        }
    }

    /// Runs a submit attempt. On validation failure the session keeps the
    /// typed values and carries the errors back for display. On success
    /// the composed message is linked to `destination_id` and handed to
    /// `opener`; the form stays editable so the visitor can follow up with
    /// another request. Opening is fire-and-forget: the outcome reports the
    /// link that was built even if the opener fails.
    pub fn submit(self, destination_id: &str, opener: &dyn LinkOpener) -> (FormSession, SubmitOutcome) {
        let errors = validate(&self.request);
        if !errors.is_empty() {
            tracing::debug!(failed_fields = errors.len(), "booking submit rejected");
            let session = FormSession {
                request: self.request,
                errors: errors.clone(),
            };
            return (session, SubmitOutcome::Invalid(errors));
        }

        let message = compose_booking_message(&self.request);
        let url = build_chat_link(destination_id, &message);
        tracing::info!(service = %self.request.service, "opening booking deep link");
        if let Err(e) = opener.open(&url) {
            tracing::warn!("failed to open booking link: {e}");
        }

        let session = FormSession {
            request: self.request,
            errors: ValidationErrors::new(),
        };
        (session, SubmitOutcome::LinkOpened(url))
    }
}
