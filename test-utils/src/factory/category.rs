//! Category factory for attaching services to test outlets.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category row for the given outlet.
///
/// # Arguments
/// - `db` - Database connection
/// - `outlet_id` - ID of the outlet offering the service
/// - `category` - Category display name, e.g. `"24 Hours"`
///
/// # Returns
/// - `Ok(entity::category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert (including a missing outlet)
pub async fn create_category(
    db: &DatabaseConnection,
    outlet_id: i32,
    category: &str,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        outlet_id: ActiveValue::Set(outlet_id),
        category: ActiveValue::Set(category.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
