use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::booking_models::{BookingField, BookingRequest, ValidationErrors};

/// Optional leading `+`, then at least 10 characters drawn from digits,
/// spaces and hyphens. Separators count toward the minimum, so this is a
/// "looks like a phone number" check rather than a strict 10-digit rule.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[\d\s-]{10,}$").unwrap());

pub fn is_phone_like(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks every field independently and collects all failures in one pass,
/// so the form can show each problem next to its own input.
pub fn validate(request: &BookingRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.insert(BookingField::Name, "Full Name is required.");
    } else if name.chars().count() < 2 {
        errors.insert(BookingField::Name, "Name must be at least 2 characters.");
    }

    let phone = request.phone.trim();
    if phone.is_empty() {
        errors.insert(BookingField::Phone, "Phone Number is required.");
    } else if !is_phone_like(phone) {
        errors.insert(
            BookingField::Phone,
            "Please enter a valid phone number (min 10 digits).",
        );
    }

    if request.service.is_empty() {
        errors.insert(BookingField::Service, "Please select a service.");
    }

    // date and message are optional and never error

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str, service: &str) -> BookingRequest {
        BookingRequest {
            name: name.into(),
            phone: phone.into(),
            service: service.into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_name_is_required() {
        let errors = validate(&request("", "+91 98765 43210", "Yoga Therapy"));
        assert_eq!(errors.get(BookingField::Name), Some("Full Name is required."));
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let errors = validate(&request("   ", "+91 98765 43210", "Yoga Therapy"));
        assert_eq!(errors.get(BookingField::Name), Some("Full Name is required."));
    }

    #[test]
    fn single_character_name_is_too_short() {
        let errors = validate(&request("A", "+91 98765 43210", "Yoga Therapy"));
        assert_eq!(
            errors.get(BookingField::Name),
            Some("Name must be at least 2 characters.")
        );
    }

    #[test]
    fn two_character_name_passes() {
        let errors = validate(&request("Al", "+91 98765 43210", "Yoga Therapy"));
        assert!(errors.get(BookingField::Name).is_none());
    }

    #[test]
    fn short_phone_is_rejected() {
        let errors = validate(&request("Aditi", "12345", "Yoga Therapy"));
        assert_eq!(
            errors.get(BookingField::Phone),
            Some("Please enter a valid phone number (min 10 digits).")
        );
    }

    #[test]
    fn international_phone_with_spaces_passes() {
        let errors = validate(&request("Aditi", "+91 98765 43210", "Yoga Therapy"));
        assert!(errors.get(BookingField::Phone).is_none());
    }

    #[test]
    fn separators_count_toward_the_minimum_length() {
        // ten hyphens and no digits satisfy the pattern as written
        assert!(is_phone_like("----------"));
        let errors = validate(&request("Aditi", "----------", "Yoga Therapy"));
        assert!(errors.get(BookingField::Phone).is_none());
    }

    #[test]
    fn letters_in_phone_are_rejected() {
        assert!(!is_phone_like("call me maybe"));
        assert!(!is_phone_like("98765abc43210"));
    }

    #[test]
    fn phone_is_trimmed_before_matching() {
        let errors = validate(&request("Aditi", "  9876543210  ", "Yoga Therapy"));
        assert!(errors.get(BookingField::Phone).is_none());
    }

    #[test]
    fn empty_service_is_rejected_any_other_value_passes() {
        let errors = validate(&request("Aditi", "9876543210", ""));
        assert_eq!(errors.get(BookingField::Service), Some("Please select a service."));

        // catalog membership is deliberately not enforced
        let errors = validate(&request("Aditi", "9876543210", "Underwater Basket Weaving"));
        assert!(errors.get(BookingField::Service).is_none());
    }

    #[test]
    fn date_and_message_never_error() {
        let mut req = request("Aditi", "9876543210", "Yoga Therapy");
        req.date = "not a date at all".into();
        req.message = "\n\n???".into();
        assert!(validate(&req).is_empty());
    }

    #[test]
    fn all_failures_are_collected_in_one_pass() {
        let errors = validate(&request("", "123", ""));
        assert_eq!(errors.len(), 3);
        assert!(errors.get(BookingField::Name).is_some());
        assert!(errors.get(BookingField::Phone).is_some());
        assert!(errors.get(BookingField::Service).is_some());
    }
}
