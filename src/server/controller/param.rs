use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::service::outlet::DEFAULT_RADIUS_KM;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParam {
    /// Text contained in the outlet name, matched case-insensitively
    pub query: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryLocationParam {
    /// Comma-separated category names
    pub categories: String,
    /// Text contained in the outlet address
    pub location: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParam {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Search radius in kilometres (default: 5)
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChatbotParam {
    /// Free-text question, e.g. "Which outlets are 24 hours?"
    pub query: String,
}
