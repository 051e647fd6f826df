use super::*;

/// Tests listing the categories of an outlet.
///
/// Expected: Ok with category names in insertion order
#[tokio::test]
async fn returns_categories_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outlet = factory::create_outlet_with_categories(
        db,
        "McDonald's Jalan Ipoh",
        "Jalan Ipoh, 51200 Kuala Lumpur",
        &["WiFi", "24 Hours", "Drive-Thru"],
    )
    .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_by_outlet_id(outlet.id).await?;

    assert_eq!(categories, vec!["WiFi", "24 Hours", "Drive-Thru"]);

    Ok(())
}

/// Tests that categories of other outlets are not included.
///
/// Expected: Ok with only the requested outlet's categories
#[tokio::test]
async fn excludes_other_outlets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_outlet(db).await?;
    let second = factory::create_outlet(db).await?;
    factory::create_category(db, first.id, "McCafe").await?;
    factory::create_category(db, second.id, "Surau").await?;

    let categories = CategoryRepository::new(db)
        .get_by_outlet_id(second.id)
        .await?;

    assert_eq!(categories, vec!["Surau"]);

    Ok(())
}

/// Tests an outlet ID that does not exist.
///
/// Expected: Ok(empty list)
#[tokio::test]
async fn returns_empty_for_unknown_outlet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let categories = CategoryRepository::new(db).get_by_outlet_id(999).await?;

    assert!(categories.is_empty());

    Ok(())
}
