use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five inputs of the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Phone,
    Service,
    Date,
    Message,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Service => "service",
            BookingField::Date => "date",
            BookingField::Message => "message",
        }
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consultation request as typed into the form. Lives only for the
/// duration of the form session, nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

impl BookingRequest {
    pub fn field(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Service => &self.service,
            BookingField::Date => &self.date,
            BookingField::Message => &self.message,
        }
    }

    /// Returns a copy of the request with one field replaced. Edits never
    /// mutate in place so the session can hand out consistent snapshots.
    pub fn with_field(&self, field: BookingField, value: &str) -> BookingRequest {
        let mut next = self.clone();
        let slot = match field {
            BookingField::Name => &mut next.name,
            BookingField::Phone => &mut next.phone,
            BookingField::Service => &mut next.service,
            BookingField::Date => &mut next.date,
            BookingField::Message => &mut next.message,
        };
        *slot = value.to_string();
        next
    }
}

/// Per-field validation messages. An empty mapping means the request is
/// submittable; a field missing from the mapping has no error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(BTreeMap<BookingField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors(BTreeMap::new())
    }

    pub fn insert(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates in declaration order of the form fields.
    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Returns a copy with one field's error dropped, used when that field
    /// is edited again.
    pub fn without(&self, field: BookingField) -> ValidationErrors {
        let mut next = self.clone();
        next.0.remove(&field);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_replaces_only_the_requested_field() {
        let request = BookingRequest {
            name: "Aditi".into(),
            phone: "+91 98765 43210".into(),
            ..Default::default()
        };

        let edited = request.with_field(BookingField::Service, "Yoga Therapy");

        assert_eq!(edited.name, "Aditi");
        assert_eq!(edited.phone, "+91 98765 43210");
        assert_eq!(edited.service, "Yoga Therapy");
        // the original snapshot is untouched
        assert_eq!(request.service, "");
    }

    #[test]
    fn without_drops_a_single_error() {
        let mut errors = ValidationErrors::new();
        errors.insert(BookingField::Name, "Full Name is required.");
        errors.insert(BookingField::Phone, "Phone Number is required.");

        let cleared = errors.without(BookingField::Name);

        assert_eq!(cleared.len(), 1);
        assert!(cleared.get(BookingField::Name).is_none());
        assert_eq!(cleared.get(BookingField::Phone), Some("Phone Number is required."));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn errors_serialize_with_lowercase_field_keys() {
        let mut errors = ValidationErrors::new();
        errors.insert(BookingField::Service, "Please select a service.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["service"], "Please select a service.");
    }
}
