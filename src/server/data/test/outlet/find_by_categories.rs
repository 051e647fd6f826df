use super::*;

/// Tests that outlets with several matching categories appear once.
///
/// Expected: Ok with distinct outlets ordered by ID
#[tokio::test]
async fn returns_each_outlet_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let both = factory::create_outlet_with_categories(
        db,
        "Both",
        "Jalan Bukit Bintang, Kuala Lumpur",
        &["24 Hours", "WiFi"],
    )
    .await?;
    factory::create_outlet_with_categories(db, "Cafe", "Cheras", &["McCafe"]).await?;

    let outlets = OutletRepository::new(db)
        .find_by_categories(&["24 Hours".to_string(), "wifi".to_string()], None)
        .await?;

    assert_eq!(outlets.len(), 1);
    assert_eq!(outlets[0].id, both.id);

    Ok(())
}

/// Tests combining categories with an address fragment.
///
/// Expected: Ok with outlets matching both the category and the location
#[tokio::test]
async fn restricts_to_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bintang = factory::create_outlet_with_categories(
        db,
        "Bintang",
        "Jalan Bukit Bintang, 55100 Kuala Lumpur",
        &["24 Hours"],
    )
    .await?;
    factory::create_outlet_with_categories(
        db,
        "Cheras",
        "Jalan Cheras, 56000 Kuala Lumpur",
        &["24 Hours"],
    )
    .await?;
    factory::create_outlet_with_categories(
        db,
        "Bintang Cafe",
        "Jalan Bukit Bintang, 55100 Kuala Lumpur",
        &["McCafe"],
    )
    .await?;

    let outlets = OutletRepository::new(db)
        .find_by_categories(&["24 hours".to_string()], Some("bukit bintang"))
        .await?;

    assert_eq!(outlets.len(), 1);
    assert_eq!(outlets[0].id, bintang.id);

    Ok(())
}

/// Tests categories no outlet offers.
///
/// Expected: Ok(empty list)
#[tokio::test]
async fn unknown_category_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_outlet_with_categories(db, "Any", "Anywhere", &["WiFi"]).await?;

    let outlets = OutletRepository::new(db)
        .find_by_categories(&["Helipad".to_string()], None)
        .await?;

    assert!(outlets.is_empty());

    Ok(())
}
