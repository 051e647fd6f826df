use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, outlet::OutletRepository},
    error::AppError,
    model::outlet::{NearbyOutlet, NearbyParam, Outlet},
    util::geo,
};

/// Radius used by nearby searches when the client does not provide one
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

pub struct OutletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OutletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every outlet
    pub async fn list(&self) -> Result<Vec<Outlet>, AppError> {
        let outlets = OutletRepository::new(self.db).get_all().await?;

        Ok(outlets.into_iter().map(Outlet::from_entity).collect())
    }

    /// Gets outlets whose name contains the query, ignoring case
    pub async fn search(&self, query: &str) -> Result<Vec<Outlet>, AppError> {
        let outlets = OutletRepository::new(self.db).search_by_name(query).await?;

        Ok(outlets.into_iter().map(Outlet::from_entity).collect())
    }

    /// Gets a single outlet
    ///
    /// # Returns
    /// - `Ok(Outlet)` - The outlet
    /// - `Err(AppError::NotFound)` - No outlet has this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Outlet, AppError> {
        OutletRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Outlet::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Outlet with id {} not found", id)))
    }

    /// Gets outlets whose address contains the location, ignoring case
    pub async fn by_location(&self, location: &str) -> Result<Vec<Outlet>, AppError> {
        let outlets = OutletRepository::new(self.db).find_by_address(location).await?;

        Ok(outlets.into_iter().map(Outlet::from_entity).collect())
    }

    /// Gets outlets offering any of the categories
    pub async fn by_categories(&self, categories: &[String]) -> Result<Vec<Outlet>, AppError> {
        let outlets = OutletRepository::new(self.db)
            .find_by_categories(categories, None)
            .await?;

        Ok(outlets.into_iter().map(Outlet::from_entity).collect())
    }

    /// Gets outlets in the location offering any of the categories
    pub async fn by_categories_and_location(
        &self,
        categories: &[String],
        location: &str,
    ) -> Result<Vec<Outlet>, AppError> {
        let outlets = OutletRepository::new(self.db)
            .find_by_categories(categories, Some(location))
            .await?;

        Ok(outlets.into_iter().map(Outlet::from_entity).collect())
    }

    /// Gets geocoded outlets within the radius of a point, nearest first
    ///
    /// # Returns
    /// - `Ok(Vec<NearbyOutlet>)` - Outlets with their distance, sorted ascending
    /// - `Err(AppError::BadRequest)` - Coordinates out of range or radius negative/non-finite
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn nearby(&self, param: NearbyParam) -> Result<Vec<NearbyOutlet>, AppError> {
        if !geo::is_valid_coordinate(param.lat, param.lng) {
            return Err(AppError::BadRequest(format!(
                "Invalid coordinates ({}, {}): latitude must be within [-90, 90] and longitude within [-180, 180]",
                param.lat, param.lng
            )));
        }

        if !param.radius_km.is_finite() || param.radius_km < 0.0 {
            return Err(AppError::BadRequest(format!(
                "Invalid radius {}: must be a non-negative number of kilometres",
                param.radius_km
            )));
        }

        let origin = (param.lat, param.lng);
        let outlets = OutletRepository::new(self.db).get_geocoded().await?;

        let mut nearby: Vec<NearbyOutlet> = outlets
            .into_iter()
            .map(Outlet::from_entity)
            .filter_map(|outlet| {
                let distance_km = geo::distance_km(origin, outlet.coordinates()?);
                (distance_km <= param.radius_km).then_some(NearbyOutlet {
                    outlet,
                    distance_km,
                })
            })
            .collect();

        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(nearby)
    }

    /// Gets the services (category names) offered by an outlet
    ///
    /// An unknown outlet yields an empty list.
    pub async fn services(&self, outlet_id: i32) -> Result<Vec<String>, AppError> {
        Ok(CategoryRepository::new(self.db)
            .get_by_outlet_id(outlet_id)
            .await?)
    }
}

/// Splits a comma-separated category list, dropping blank entries.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect()
}
