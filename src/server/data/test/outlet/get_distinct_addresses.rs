use super::*;

/// Tests that repeated addresses are returned once.
///
/// Expected: Ok with distinct addresses sorted alphabetically
#[tokio::test]
async fn deduplicates_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    OutletFactory::new(db).address("Sentul, Kuala Lumpur").build().await?;
    OutletFactory::new(db).address("Cheras, Kuala Lumpur").build().await?;
    OutletFactory::new(db).address("Sentul, Kuala Lumpur").build().await?;

    let addresses = OutletRepository::new(db).get_distinct_addresses().await?;

    assert_eq!(
        addresses,
        vec![
            "Cheras, Kuala Lumpur".to_string(),
            "Sentul, Kuala Lumpur".to_string()
        ]
    );

    Ok(())
}
