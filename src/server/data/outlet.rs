//! Outlet data repository for database operations
//!
//! Provides the `OutletRepository` for querying outlets by name, address, category, and
//! coordinates. Text matching mirrors `LOWER(column) LIKE %needle%` so it is
//! case-insensitive regardless of the SQLite collation in use.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::category::CategoryRepository, model::outlet::CreateOutletParam};

/// Repository providing database operations for outlets.
pub struct OutletRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutletRepository<'a, C> {
    /// Creates a new OutletRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `OutletRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new outlet
    ///
    /// # Arguments
    /// - `param` - Outlet fields to insert
    ///
    /// # Returns
    /// - `Ok(entity::outlet::Model)` - The inserted outlet with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateOutletParam) -> Result<entity::outlet::Model, DbErr> {
        entity::outlet::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            telephone: ActiveValue::Set(param.telephone),
            lat: ActiveValue::Set(param.lat),
            lng: ActiveValue::Set(param.lng),
            waze_link: ActiveValue::Set(param.waze_link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every outlet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find()
            .order_by_asc(entity::outlet::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts the stored outlets
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Outlet::find().count(self.db).await
    }

    /// Finds an outlet by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The outlet if found
    /// - `Ok(None)` - No outlet has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find_by_id(id).one(self.db).await
    }

    /// Finds outlets whose name contains the query, ignoring case
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::outlet::Column::Name)))
                    .like(contains_pattern(query)),
            )
            .order_by_asc(entity::outlet::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds outlets whose address contains the location, ignoring case
    pub async fn find_by_address(
        &self,
        location: &str,
    ) -> Result<Vec<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::outlet::Column::Address)))
                    .like(contains_pattern(location)),
            )
            .order_by_asc(entity::outlet::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds outlets having any of the categories, optionally restricted to an address fragment
    ///
    /// Each outlet appears once no matter how many of its categories match.
    ///
    /// # Arguments
    /// - `categories` - Category names, compared case-insensitively
    /// - `location` - Optional address fragment, compared case-insensitively
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching outlets ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_categories(
        &self,
        categories: &[String],
        location: Option<&str>,
    ) -> Result<Vec<entity::outlet::Model>, DbErr> {
        let outlet_ids = CategoryRepository::new(self.db)
            .find_outlet_ids_by_categories(categories)
            .await?;

        if outlet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Outlet::find()
            .filter(entity::outlet::Column::Id.is_in(outlet_ids));

        if let Some(location) = location {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::outlet::Column::Address)))
                    .like(contains_pattern(location)),
            );
        }

        query
            .order_by_asc(entity::outlet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every outlet that has both latitude and longitude
    pub async fn get_geocoded(&self) -> Result<Vec<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find()
            .filter(entity::outlet::Column::Lat.is_not_null())
            .filter(entity::outlet::Column::Lng.is_not_null())
            .order_by_asc(entity::outlet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the distinct outlet addresses
    pub async fn get_distinct_addresses(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Outlet::find()
            .select_only()
            .column(entity::outlet::Column::Address)
            .distinct()
            .order_by_asc(entity::outlet::Column::Address)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

fn contains_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}
