//! Known outlet categories and the phrases that refer to them.

use crate::server::service::chatbot::fuzz;

/// Minimum `partial_ratio` a keyword must exceed for its category to be selected.
pub const KEYWORD_THRESHOLD: u8 = 80;

/// Category display names paired with the phrases customers use for them.
pub const OUTLET_CATEGORIES: &[(&str, &[&str])] = &[
    ("24 Hours", &["24 hours", "open all day", "always open"]),
    ("Birthday Party", &["birthday party", "kids party", "celebration"]),
    ("Breakfast", &["breakfast", "morning menu", "breakfast hours"]),
    ("Cashless Facility", &["cashless", "no cash", "digital payment"]),
    ("Dessert Center", &["dessert", "sweets", "ice cream"]),
    ("Drive-Thru", &["drive-thru", "drive through", "car pickup"]),
    ("McCafe", &["mccafe", "cafe", "coffee"]),
    ("McDelivery", &["mcdelivery", "home delivery", "food delivery"]),
    ("Surau", &["surau", "prayer room", "mosque", "masjid"]),
    ("WiFi", &["wifi", "internet", "free wifi"]),
    (
        "Digital Order Kiosk",
        &["digital kiosk", "self-service kiosk", "order kiosk"],
    ),
    (
        "Electric Vehicle",
        &["electric vehicle", "ev charging", "charging station"],
    ),
];

/// Categories whose keywords fuzzily appear in the query, in catalog order.
pub fn extract_categories(query: &str) -> Vec<String> {
    OUTLET_CATEGORIES
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| fuzz::partial_ratio(query, keyword) > KEYWORD_THRESHOLD)
        })
        .map(|(category, _)| category.to_string())
        .collect()
}
