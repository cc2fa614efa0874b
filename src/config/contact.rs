use serde::Serialize;
use std::env;
use thiserror::Error;

// Published studio details, overridable through STUDIO_* variables.
const DEFAULT_PHONE: &str = "+91 9902632359";
const DEFAULT_EMAIL: &str = "nee2bfy@gmail.com";
const DEFAULT_ADDRESS: &str =
    "Kapila 13/A, Whitefield Main Road, Rushtamjee Layout, Whitefield, Bangalore- 560066";
const DEFAULT_HOURS: &str = "Mon - Sat: 6:00 AM - 8:00 PM";
const DEFAULT_CHAT_MESSAGE: &str = "Hello! I am interested in scheduling a consultation.";

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("whatsapp destination is empty")]
    EmptyDestination,
    #[error("whatsapp destination contains invalid character {0:?}")]
    InvalidDestination(char),
}

/// Contact details the booking flow needs: `phone` is the display form,
/// `whatsapp` the normalized destination id the `wa.me` API expects.
#[derive(Debug, Clone, Serialize)]
pub struct StudioConfig {
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    pub default_chat_message: String,
}

impl StudioConfig {
    /// Loads the config from the environment (reading `.env` if present),
    /// falling back to the studio's published details. Fails only when the
    /// configured phone number cannot be normalized into a destination id.
    pub fn from_env() -> Result<StudioConfig, ContactError> {
        dotenvy::dotenv().ok();

        let phone = env::var("STUDIO_PHONE").unwrap_or_else(|_| DEFAULT_PHONE.to_string());
        let whatsapp = match env::var("STUDIO_WHATSAPP") {
            Ok(raw) => normalize_destination(&raw)?,
            Err(_) => normalize_destination(&phone)?,
        };

        Ok(StudioConfig {
            phone,
            whatsapp,
            email: env::var("STUDIO_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string()),
            address: env::var("STUDIO_ADDRESS").unwrap_or_else(|_| DEFAULT_ADDRESS.to_string()),
            hours: env::var("STUDIO_HOURS").unwrap_or_else(|_| DEFAULT_HOURS.to_string()),
            default_chat_message: env::var("STUDIO_CHAT_MESSAGE")
                .unwrap_or_else(|_| DEFAULT_CHAT_MESSAGE.to_string()),
        })
    }
}

/// Reduces a display phone number to the form `wa.me` expects: digits only,
/// country code included, no leading `+` and no separators.
pub fn normalize_destination(phone: &str) -> Result<String, ContactError> {
    let mut digits = String::with_capacity(phone.len());
    for ch in phone.trim().trim_start_matches('+').chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' => {}
            other => return Err(ContactError::InvalidDestination(other)),
        }
    }
    if digits.is_empty() {
        return Err(ContactError::EmptyDestination);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_the_published_number() {
        assert_eq!(normalize_destination("+91 9902632359").unwrap(), "919902632359");
    }

    #[test]
    fn strips_separators_but_keeps_digits() {
        assert_eq!(normalize_destination("+91-99026-32359").unwrap(), "919902632359");
        assert_eq!(normalize_destination("919902632359").unwrap(), "919902632359");
    }

    #[test]
    fn rejects_empty_and_non_digit_input() {
        assert_eq!(normalize_destination("+ -"), Err(ContactError::EmptyDestination));
        assert_eq!(
            normalize_destination("+91 99026x2359"),
            Err(ContactError::InvalidDestination('x'))
        );
    }
}
