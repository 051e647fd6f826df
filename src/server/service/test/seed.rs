use super::*;
use crate::server::{
    data::{category::CategoryRepository, outlet::OutletRepository},
    model::seed::SeedOutlet,
    service::seed::SeedService,
};

fn seed_outlets() -> Vec<SeedOutlet> {
    serde_json::from_str(
        r#"[
            {
                "name": "McDonald's Bukit Bintang",
                "address": "Jalan Bukit Bintang, 55100 Kuala Lumpur",
                "telephone": "03-2141 3000",
                "lat": 3.1466,
                "lng": 101.7101,
                "categories": ["24 Hours", " ", "WiFi "]
            },
            {
                "name": "McDonald's Cheras",
                "address": "Jalan Cheras, 56000 Kuala Lumpur"
            }
        ]"#,
    )
    .unwrap()
}

/// Tests importing seed entries with their categories.
///
/// Expected: Ok with every outlet stored and blank categories dropped
#[tokio::test]
async fn imports_outlets_and_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imported = SeedService::new(db).import(seed_outlets()).await?;

    assert_eq!(imported, 2);

    let outlets = OutletRepository::new(db).get_all().await?;
    assert_eq!(outlets.len(), 2);
    assert_eq!(outlets[0].lat, Some(3.1466));
    assert_eq!(outlets[1].telephone, None);

    let categories = CategoryRepository::new(db)
        .get_by_outlet_id(outlets[0].id)
        .await?;
    assert_eq!(categories, vec!["24 Hours", "WiFi"]);

    Ok(())
}

/// Tests that an insert failing midway rolls back the whole import.
///
/// Expected: Err(AppError::DbErr) with no outlets left behind
#[tokio::test]
async fn failed_import_leaves_no_outlets() -> Result<(), AppError> {
    // No categories table, so the first category insert fails after its outlet was stored
    let test = TestBuilder::new()
        .with_table(entity::prelude::Outlet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeedService::new(db).import(seed_outlets()).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(OutletRepository::new(db).count().await?, 0);

    Ok(())
}

/// Tests that a populated database is left untouched.
///
/// Expected: Ok(None) without reading the seed file
#[tokio::test]
async fn skips_import_when_outlets_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_outlet(db).await?;

    let result = SeedService::new(db)
        .import_if_empty("does/not/exist.json")
        .await?;

    assert_eq!(result, None);

    Ok(())
}

/// Tests importing from a file on disk into an empty database.
///
/// Expected: Ok(Some(count))
#[tokio::test]
async fn imports_seed_file_into_empty_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let path = std::env::temp_dir().join(format!("mcmap-seed-{}.json", std::process::id()));
    tokio::fs::write(
        &path,
        r#"[{"name": "McDonald's Sentul", "address": "Sentul", "categories": ["Surau"]}]"#,
    )
    .await?;

    let result = SeedService::new(db).import_if_empty(&path).await;
    tokio::fs::remove_file(&path).await?;

    assert_eq!(result?, Some(1));
    assert_eq!(OutletRepository::new(db).count().await?, 1);

    Ok(())
}

/// Tests a seed file that does not exist.
///
/// Expected: Err(AppError::IoErr)
#[tokio::test]
async fn missing_seed_file_is_an_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeedService::new(db)
        .import_if_empty("does/not/exist.json")
        .await;

    assert!(matches!(result, Err(AppError::IoErr(_))));

    Ok(())
}
