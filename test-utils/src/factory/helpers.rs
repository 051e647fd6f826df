//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an outlet with the given name and address plus one category row per entry.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Outlet name
/// - `address` - Outlet address
/// - `categories` - Category names attached to the outlet
///
/// # Returns
/// - `Ok(entity::outlet::Model)` - The created outlet
/// - `Err(DbErr)` - Database error during creation
pub async fn create_outlet_with_categories(
    db: &DatabaseConnection,
    name: &str,
    address: &str,
    categories: &[&str],
) -> Result<entity::outlet::Model, DbErr> {
    let outlet = crate::factory::outlet::OutletFactory::new(db)
        .name(name)
        .address(address)
        .build()
        .await?;

    for category in categories {
        crate::factory::category::create_category(db, outlet.id, category).await?;
    }

    Ok(outlet)
}
