use super::*;

/// Tests that name search is a case-insensitive substring match.
///
/// Expected: Ok with only outlets whose name contains the query
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bintang = OutletFactory::new(db)
        .name("McDonald's Bukit Bintang")
        .build()
        .await?;
    OutletFactory::new(db).name("McDonald's Cheras").build().await?;

    let outlets = OutletRepository::new(db).search_by_name("BINTANG").await?;

    assert_eq!(outlets.len(), 1);
    assert_eq!(outlets[0].id, bintang.id);

    Ok(())
}

/// Tests that an empty query matches every outlet.
///
/// Expected: Ok with all outlets
#[tokio::test]
async fn empty_query_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_outlet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_outlet(db).await?;
    factory::create_outlet(db).await?;

    let outlets = OutletRepository::new(db).search_by_name("").await?;

    assert_eq!(outlets.len(), 2);

    Ok(())
}
