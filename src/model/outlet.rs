use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::MessageDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OutletDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub telephone: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub waze_link: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OutletsDto {
    pub outlets: Vec<OutletDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SingleOutletDto {
    pub outlet: OutletDto,
}

/// An outlet together with its distance in kilometres from the searched point.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NearbyOutletDto {
    #[serde(flatten)]
    pub outlet: OutletDto,
    pub distance: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NearbyOutletsDto {
    pub outlets: Vec<NearbyOutletDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OutletServicesDto {
    pub outlet_id: i32,
    pub services: Vec<String>,
}

/// Location lookups answer with a message instead of an empty list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum LocationOutletsDto {
    Outlets(OutletsDto),
    Message(MessageDto),
}
