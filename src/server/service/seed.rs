//! One-off import of outlets from a JSON seed file into an empty database.

use std::path::Path;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{category::CategoryRepository, outlet::OutletRepository},
    error::AppError,
    model::seed::SeedOutlet,
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports the seed file when the outlets table is empty
    ///
    /// # Arguments
    /// - `path` - JSON file containing an array of outlets with their categories
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of outlets imported
    /// - `Ok(None)` - Outlets already exist, nothing was imported
    /// - `Err(AppError::IoErr)` - Seed file could not be read
    /// - `Err(AppError::JsonErr)` - Seed file is not a valid outlet array
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn import_if_empty(&self, path: impl AsRef<Path>) -> Result<Option<usize>, AppError> {
        let outlet_repo = OutletRepository::new(self.db);

        let existing = outlet_repo.count().await?;
        if existing > 0 {
            tracing::info!(
                "Skipping seed import, database already holds {} outlets",
                existing
            );
            return Ok(None);
        }

        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let seed: Vec<SeedOutlet> = serde_json::from_str(&raw)?;

        let imported = self.import(seed).await?;
        tracing::info!(
            "Imported {} outlets from {}",
            imported,
            path.as_ref().display()
        );

        Ok(Some(imported))
    }

    /// Inserts every seed entry together with its categories
    ///
    /// Runs in a single transaction, so a failed insert leaves the tables untouched.
    pub async fn import(&self, seed: Vec<SeedOutlet>) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;

        match insert_all(&txn, seed).await {
            Ok(imported) => {
                txn.commit().await?;
                Ok(imported)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }
}

async fn insert_all<C: ConnectionTrait>(db: &C, seed: Vec<SeedOutlet>) -> Result<usize, AppError> {
    let outlet_repo = OutletRepository::new(db);
    let category_repo = CategoryRepository::new(db);

    let mut imported = 0;
    for entry in seed {
        let (param, categories) = entry.into_param();
        let outlet = outlet_repo.create(param).await?;

        for category in categories {
            let category = category.trim().to_string();
            if !category.is_empty() {
                category_repo.create(outlet.id, category).await?;
            }
        }

        imported += 1;
    }

    Ok(imported)
}
