//! Outlet factory for creating test outlet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test outlets with customizable fields.
///
/// Defaults to an outlet without telephone, coordinates, or Waze link.
pub struct OutletFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    telephone: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    waze_link: Option<String>,
}

impl<'a> OutletFactory<'a> {
    /// Creates a new OutletFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Outlet {id}"`
    /// - address: `"{id} Jalan Test, 50000 Kuala Lumpur"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Outlet {}", id),
            address: format!("{} Jalan Test, 50000 Kuala Lumpur", id),
            telephone: None,
            lat: None,
            lng: None,
            waze_link: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    /// Sets the latitude & longitude of the outlet in degrees.
    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    pub fn waze_link(mut self, waze_link: impl Into<String>) -> Self {
        self.waze_link = Some(waze_link.into());
        self
    }

    /// Builds and inserts the outlet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::outlet::Model)` - Created outlet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::outlet::Model, DbErr> {
        entity::outlet::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            telephone: ActiveValue::Set(self.telephone),
            lat: ActiveValue::Set(self.lat),
            lng: ActiveValue::Set(self.lng),
            waze_link: ActiveValue::Set(self.waze_link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an outlet with default values.
///
/// Shorthand for `OutletFactory::new(db).build().await`.
pub async fn create_outlet(db: &DatabaseConnection) -> Result<entity::outlet::Model, DbErr> {
    OutletFactory::new(db).build().await
}
