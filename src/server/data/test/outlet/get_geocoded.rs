use super::*;

/// Tests that only outlets with both coordinates are returned.
///
/// Expected: Ok with geocoded outlets only
#[tokio::test]
async fn skips_outlets_without_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let geocoded = OutletFactory::new(db)
        .coordinates(3.1466, 101.7101)
        .build()
        .await?;
    factory::create_outlet(db).await?;

    let outlets = OutletRepository::new(db).get_geocoded().await?;

    assert_eq!(outlets.len(), 1);
    assert_eq!(outlets[0].id, geocoded.id);

    Ok(())
}
