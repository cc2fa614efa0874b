use once_cell::sync::Lazy;
use serde::Serialize;

/// Option value offered alongside the catalog for visitors who have not
/// picked a specific offering yet.
pub const GENERAL_INQUIRY: &str = "General Inquiry";

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// The studio's catalog, grouped the way the booking form groups its
/// service dropdown.
pub static SERVICES: Lazy<Vec<ServiceCategory>> = Lazy::new(|| {
    vec![
        ServiceCategory {
            id: "yoga",
            title: "Yoga & Healing",
            items: &[
                "General Yoga",
                "Yoga Therapy",
                "Meditation and Breathwork",
                "Personal and Group Sessions",
                "Prenatal/Postnatal Yoga",
                "Yoga for Senior Citizens",
                "Yoga for Kids",
                "Sessions at Homes/Apartments",
                "Corporate Yoga",
            ],
        },
        ServiceCategory {
            id: "diet",
            title: "Diet & Nutrition",
            items: &[
                "Healthy Weight Loss Programs",
                "Therapeutic Diet Consultation",
                "Lifestyle Correction",
            ],
        },
        ServiceCategory {
            id: "skin",
            title: "Skin & Wellness",
            items: &["Skin Care Consultation", "Holistic Glow Programs"],
        },
    ]
});

/// All selectable labels in dropdown order: `"<category> - <item>"` for
/// each offering, then the general-inquiry fallback last.
pub fn service_labels() -> Vec<String> {
    let mut labels: Vec<String> = SERVICES
        .iter()
        .flat_map(|category| {
            category
                .items
                .iter()
                .map(move |item| format!("{} - {}", category.title, item))
        })
        .collect();
    labels.push(GENERAL_INQUIRY.to_string());
    labels
}

/// Whether a label came from the catalog (or is the general-inquiry
/// fallback). Display-side only; the validator accepts any non-empty
/// service so stale links keep working after catalog edits.
pub fn is_known_service(label: &str) -> bool {
    label == GENERAL_INQUIRY
        || SERVICES.iter().any(|category| {
            category
                .items
                .iter()
                .any(|item| format!("{} - {}", category.title, item) == label)
        })
}
