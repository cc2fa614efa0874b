//! Booking-intent pipeline for the Blissful Aura studio site.
//!
//! Holds the consultation form state, validates it, composes the WhatsApp
//! booking message and builds the `wa.me` deep link that opens the chat
//! with the message pre-filled. Rendering and the actual opening of the
//! link are left to the host.

pub mod config {
    pub mod contact;
    pub mod services;
}

pub mod models {
    pub mod booking_models;
}

pub mod utils {
    pub mod validation_utils;
    pub mod whatsapp_utils;
}

pub mod session {
    pub mod booking_session;
}

pub use config::contact::{ContactError, StudioConfig};
pub use models::booking_models::{BookingField, BookingRequest, ValidationErrors};
pub use session::booking_session::{FormSession, LinkOpener, SubmitOutcome};
