//! Seed file format for bootstrapping an empty outlet database.

use serde::Deserialize;

use crate::server::model::outlet::CreateOutletParam;

/// One outlet entry of the seed file, a JSON array of these objects.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOutlet {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub waze_link: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl SeedOutlet {
    /// Splits the entry into the outlet row and its category names.
    pub fn into_param(self) -> (CreateOutletParam, Vec<String>) {
        (
            CreateOutletParam {
                name: self.name,
                address: self.address,
                telephone: self.telephone,
                lat: self.lat,
                lng: self.lng,
                waze_link: self.waze_link,
            },
            self.categories,
        )
    }
}
