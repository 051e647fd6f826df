//! Category data repository for database operations
//!
//! Categories are the services an outlet offers. Matching on category names is
//! case-insensitive; stored names keep their display casing.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for outlet categories.
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new CategoryRepository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches a category to an outlet
    ///
    /// # Arguments
    /// - `outlet_id` - ID of the outlet offering the service
    /// - `category` - Display name of the category
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - The created category row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        outlet_id: i32,
        category: String,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            outlet_id: ActiveValue::Set(outlet_id),
            category: ActiveValue::Set(category),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the category names of an outlet in insertion order
    ///
    /// An unknown outlet yields an empty list.
    pub async fn get_by_outlet_id(&self, outlet_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Category::find()
            .select_only()
            .column(entity::category::Column::Category)
            .filter(entity::category::Column::OutletId.eq(outlet_id))
            .order_by_asc(entity::category::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Finds the IDs of outlets having any of the provided categories
    ///
    /// # Arguments
    /// - `categories` - Category names, compared case-insensitively
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Distinct outlet IDs in ascending order
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_outlet_ids_by_categories(
        &self,
        categories: &[String],
    ) -> Result<Vec<i32>, DbErr> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

        entity::prelude::Category::find()
            .select_only()
            .column(entity::category::Column::OutletId)
            .distinct()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::category::Column::Category)))
                    .is_in(lowered),
            )
            .order_by_asc(entity::category::Column::OutletId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
