//! Place names derived from outlet addresses, used to spot locations in free text.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::server::{service::chatbot::fuzz, util::text::title_case};

/// Minimum `weighted_ratio` a location must exceed to be accepted.
pub const LOCATION_THRESHOLD: u8 = 80;

/// Street-type words removed from address parts.
const STREET_PREFIXES: &[&str] = &[
    "jalan", "jl", "st", "street", "persiaran", "lorong", "lebuhraya", "avenue", "ave",
];

static POSTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{5}\b").expect("postcode pattern is valid"));

/// Sorted, de-duplicated set of title-cased place names.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    locations: Vec<String>,
}

impl LocationIndex {
    /// Builds the index from raw outlet addresses.
    ///
    /// Each address loses its 5-digit postcodes and is split on commas. Every part is
    /// lowercased, stripped of street-type words, and title-cased. Empty parts are dropped.
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locations = BTreeSet::new();

        for address in addresses {
            let without_postcode = POSTCODE.replace_all(address.as_ref(), "");

            for part in without_postcode.split(',') {
                let lowered = part.trim().to_lowercase();
                let cleaned = lowered
                    .split_whitespace()
                    .filter(|word| !STREET_PREFIXES.contains(word))
                    .collect::<Vec<_>>()
                    .join(" ");

                if !cleaned.is_empty() {
                    locations.insert(title_case(&cleaned));
                }
            }
        }

        Self {
            locations: locations.into_iter().collect(),
        }
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Best matching location for the query, if it scores above the threshold.
    pub fn extract(&self, query: &str) -> Option<String> {
        let query = title_case(query);

        fuzz::extract_one(&query, self.locations.iter().map(String::as_str))
            .filter(|(_, score)| *score > LOCATION_THRESHOLD)
            .map(|(location, _)| location.to_string())
    }
}
