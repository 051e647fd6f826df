use super::*;

/// Tests that category matching ignores case and deduplicates outlets.
///
/// Expected: Ok with each matching outlet ID once, ascending
#[tokio::test]
async fn matches_case_insensitively_without_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let both = factory::create_outlet_with_categories(
        db,
        "Both",
        "Jalan Ampang, Kuala Lumpur",
        &["24 Hours", "Drive-Thru"],
    )
    .await?;
    let drive_thru =
        factory::create_outlet_with_categories(db, "Drive", "Cheras", &["Drive-Thru"]).await?;
    factory::create_outlet_with_categories(db, "Cafe", "Sentul", &["McCafe"]).await?;

    let ids = CategoryRepository::new(db)
        .find_outlet_ids_by_categories(&["24 hours".to_string(), "DRIVE-THRU".to_string()])
        .await?;

    assert_eq!(ids, vec![both.id, drive_thru.id]);

    Ok(())
}

/// Tests an empty category list.
///
/// Expected: Ok(empty list) without querying for every outlet
#[tokio::test]
async fn empty_categories_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_outlet_with_categories(db, "Any", "Anywhere", &["WiFi"]).await?;

    let ids = CategoryRepository::new(db)
        .find_outlet_ids_by_categories(&[])
        .await?;

    assert!(ids.is_empty());

    Ok(())
}
