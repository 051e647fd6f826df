use super::*;

/// Tests inserting an outlet and reading it back.
///
/// Expected: Ok with all fields persisted and a generated ID
#[tokio::test]
async fn creates_and_finds_outlet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OutletRepository::new(db);
    let created = repo
        .create(CreateOutletParam {
            name: "McDonald's KLCC".to_string(),
            address: "Suria KLCC, 50088 Kuala Lumpur".to_string(),
            telephone: Some("03-2161 0000".to_string()),
            lat: Some(3.1579),
            lng: Some(101.7116),
            waze_link: Some("https://waze.com/ul/klcc".to_string()),
        })
        .await?;

    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found, Some(created.clone()));
    assert_eq!(created.telephone.as_deref(), Some("03-2161 0000"));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests looking up an ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = OutletRepository::new(db).find_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that all outlets are listed in ID order.
///
/// Expected: Ok with every outlet ordered by ID
#[tokio::test]
async fn get_all_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_outlet(db).await?;
    let second = factory::create_outlet(db).await?;

    let outlets = OutletRepository::new(db).get_all().await?;

    let ids: Vec<i32> = outlets.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
