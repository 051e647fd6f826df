//! Rule-based chatbot answering free-text questions about outlets.
//!
//! A query is reduced to its content words, then scanned for known categories and for a
//! place name from the `LocationIndex`. Whatever was recognized selects the outlet
//! lookup, and the results are rendered as a plain-text message.

pub mod catalog;
pub mod fuzz;
pub mod location;
pub mod stop_words;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::outlet::Outlet,
    service::{chatbot::location::LocationIndex, outlet::OutletService},
};

pub const FALLBACK_MESSAGE: &str = "Sorry, I can't find results for your request. \
If you think you made a mistake, please try again.\n\
Please try something like:\n\
- 'Which outlets are 24 hours?'\n\
- 'Which outlets are in Bukit Bintang?'\n\
- 'Which 24-hour outlets are in Bukit Bintang?'";

pub const NO_OUTLETS_MESSAGE: &str = "No outlets found for your request.";

const RESULTS_HEADER: &str = "Here are the outlets I found:\n\n";
const RESULTS_FOOTER: &str = "If you need more information, please let me know!";

/// What the chatbot understood from a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CategoriesInLocation {
        categories: Vec<String>,
        location: String,
    },
    Categories(Vec<String>),
    Location(String),
    Unknown,
}

impl Intent {
    /// Normalizes the query and extracts categories & location from it.
    pub fn parse(query: &str, locations: &LocationIndex) -> Self {
        let cleaned = stop_words::remove_stop_words(query);
        tracing::debug!("Preprocessed chatbot query: {:?}", cleaned);

        let categories = catalog::extract_categories(&cleaned);
        let location = locations.extract(&cleaned);

        match (categories.is_empty(), location) {
            (false, Some(location)) => Intent::CategoriesInLocation {
                categories,
                location,
            },
            (false, None) => Intent::Categories(categories),
            (true, Some(location)) => Intent::Location(location),
            (true, None) => Intent::Unknown,
        }
    }
}

pub struct ChatbotService<'a> {
    db: &'a DatabaseConnection,
    locations: &'a LocationIndex,
}

impl<'a> ChatbotService<'a> {
    pub fn new(db: &'a DatabaseConnection, locations: &'a LocationIndex) -> Self {
        Self { db, locations }
    }

    /// Answers a free-text query with a human readable message
    ///
    /// # Returns
    /// - `Ok(String)` - Listing of matching outlets, a no-results notice, or usage hints
    ///   when nothing in the query was recognized
    /// - `Err(AppError::DbErr)` - Database error during the outlet lookup
    pub async fn answer(&self, query: &str) -> Result<String, AppError> {
        let outlets = OutletService::new(self.db);

        let found = match Intent::parse(query, self.locations) {
            Intent::CategoriesInLocation {
                categories,
                location,
            } => {
                tracing::info!(?categories, %location, "Chatbot matched categories and location");
                outlets.by_categories_and_location(&categories, &location).await?
            }
            Intent::Categories(categories) => {
                tracing::info!(?categories, "Chatbot matched categories");
                outlets.by_categories(&categories).await?
            }
            Intent::Location(location) => {
                tracing::info!(%location, "Chatbot matched location");
                outlets.by_location(&location).await?
            }
            Intent::Unknown => {
                tracing::info!("Chatbot could not interpret query");
                return Ok(FALLBACK_MESSAGE.to_string());
            }
        };

        Ok(format_outlets(&found))
    }
}

/// Renders outlets as name-over-address blocks between a header and a footer.
pub fn format_outlets(outlets: &[Outlet]) -> String {
    if outlets.is_empty() {
        return NO_OUTLETS_MESSAGE.to_string();
    }

    let mut message = String::from(RESULTS_HEADER);
    for outlet in outlets {
        message.push_str(outlet.name.trim());
        message.push('\n');
        message.push_str(outlet.address.trim());
        message.push_str("\n\n");
    }
    message.push_str(RESULTS_FOOTER);

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet(name: &str, address: &str) -> Outlet {
        Outlet {
            id: 1,
            name: name.to_string(),
            address: address.to_string(),
            telephone: None,
            lat: None,
            lng: None,
            waze_link: None,
        }
    }

    fn locations() -> LocationIndex {
        LocationIndex::from_addresses(["Jalan Bukit Bintang, 55100 Kuala Lumpur"])
    }

    #[test]
    fn formats_outlets_with_trimmed_fields() {
        let message = format_outlets(&[
            outlet(" McDonald's Bukit Bintang ", "Jalan Bukit Bintang "),
            outlet("McDonald's Cheras", "Jalan Cheras"),
        ]);

        assert_eq!(
            message,
            "Here are the outlets I found:\n\n\
             McDonald's Bukit Bintang\nJalan Bukit Bintang\n\n\
             McDonald's Cheras\nJalan Cheras\n\n\
             If you need more information, please let me know!"
        );
    }

    #[test]
    fn formats_empty_result() {
        assert_eq!(format_outlets(&[]), NO_OUTLETS_MESSAGE);
    }

    #[test]
    fn parses_categories_and_location() {
        assert_eq!(
            Intent::parse("Which outlets are 24 hours in Bukit Bintang?", &locations()),
            Intent::CategoriesInLocation {
                categories: vec!["24 Hours".to_string()],
                location: "Bukit Bintang".to_string(),
            }
        );
    }

    #[test]
    fn parses_location_only() {
        assert_eq!(
            Intent::parse("Which outlets are in Bukit Bintang?", &locations()),
            Intent::Location("Bukit Bintang".to_string())
        );
    }

    #[test]
    fn parses_unknown_query() {
        assert_eq!(Intent::parse("hello there", &locations()), Intent::Unknown);
    }
}
