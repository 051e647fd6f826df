use super::*;

/// Tests that address lookup is a case-insensitive substring match.
///
/// Expected: Ok with only outlets whose address contains the location
#[tokio::test]
async fn matches_address_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cheras = OutletFactory::new(db)
        .address("Jalan Cheras, 56000 Kuala Lumpur")
        .build()
        .await?;
    OutletFactory::new(db)
        .address("Jalan Ampang, 50450 Kuala Lumpur")
        .build()
        .await?;

    let outlets = OutletRepository::new(db).find_by_address("cHeRaS").await?;

    assert_eq!(outlets.len(), 1);
    assert_eq!(outlets[0].id, cheras.id);

    Ok(())
}

/// Tests a location that no address contains.
///
/// Expected: Ok(empty list)
#[tokio::test]
async fn returns_empty_for_unknown_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_outlet(db).await?;

    let outlets = OutletRepository::new(db).find_by_address("Penang").await?;

    assert!(outlets.is_empty());

    Ok(())
}
