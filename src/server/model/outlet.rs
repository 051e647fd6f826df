//! Domain & parameter models for outlet operations

use crate::model::outlet::{NearbyOutletDto, OutletDto};

/// The outlet domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Outlet {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub telephone: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub waze_link: Option<String>,
}

impl Outlet {
    /// Converts an entity model to the outlet domain model
    pub fn from_entity(entity: entity::outlet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            telephone: entity.telephone,
            lat: entity.lat,
            lng: entity.lng,
            waze_link: entity.waze_link,
        }
    }

    /// Returns `(lat, lng)` when the outlet has been geocoded.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }

    pub fn into_dto(self) -> OutletDto {
        OutletDto {
            id: self.id,
            name: self.name,
            address: self.address,
            telephone: self.telephone,
            lat: self.lat,
            lng: self.lng,
            waze_link: self.waze_link,
        }
    }
}

/// An outlet found by a radius search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyOutlet {
    pub outlet: Outlet,
    /// Great-circle distance from the searched point in kilometres
    pub distance_km: f64,
}

impl NearbyOutlet {
    pub fn into_dto(self) -> NearbyOutletDto {
        NearbyOutletDto {
            outlet: self.outlet.into_dto(),
            distance: self.distance_km,
        }
    }
}

/// Parameters for a radius search around a point
#[derive(Debug, Clone, Copy)]
pub struct NearbyParam {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

/// Parameters for creating a new outlet
#[derive(Debug, Clone)]
pub struct CreateOutletParam {
    pub name: String,
    pub address: String,
    pub telephone: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub waze_link: Option<String>,
}
