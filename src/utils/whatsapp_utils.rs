use crate::config::contact::StudioConfig;
use crate::models::booking_models::BookingRequest;

const WA_HOST: &str = "https://wa.me";

/// Formats a booking request as the WhatsApp message the studio receives.
/// WhatsApp renders `*...*` as bold. The caller is expected to have run
/// validation first; empty optional fields fall back to placeholders.
pub fn compose_booking_message(request: &BookingRequest) -> String {
    let date = if request.date.is_empty() {
        "Flexible"
    } else {
        request.date.as_str()
    };
    let message = if request.message.is_empty() {
        "N/A"
    } else {
        request.message.as_str()
    };

    format!(
        "*New Booking Request from Website*\n\nName: {}\nPhone: {}\nService: {}\nPreferred Date: {}\nMessage: {}",
        request.name, request.phone, request.service, date, message
    )
}

/// Builds a `wa.me` deep link that opens a chat with `message` pre-filled.
///
/// `destination_id` must already be normalized (digits only, with country
/// code); see [`crate::config::contact::normalize_destination`]. The text
/// is percent-encoded so newlines, `&`, `?` and markup characters survive
/// the query string intact.
pub fn build_chat_link(destination_id: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WA_HOST,
        destination_id,
        urlencoding::encode(message)
    )
}

/// Bare chat link with no pre-filled text, used on the contact section.
pub fn contact_link(destination_id: &str) -> String {
    format!("{}/{}", WA_HOST, destination_id)
}

/// Deep link for the site-wide "Chat Now" affordance, pre-filled with the
/// studio's generic greeting.
pub fn default_chat_link(config: &StudioConfig) -> String {
    build_chat_link(&config.whatsapp, &config.default_chat_message)
}
