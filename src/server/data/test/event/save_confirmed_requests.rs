use super::*;

/// Tests writing the ledger counter.
///
/// Verifies that only the confirmed counter changes and the rest of the ledger
/// (limit and moderation flag) is preserved.
///
/// Expected: Ok with the new counter value
#[tokio::test]
async fn writes_counter_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 5, true).await?;

    let repo = EventRepository::new(db);
    let updated = repo.save_confirmed_requests(event.id, 3).await?;

    assert_eq!(updated.confirmed_requests, 3);
    assert_eq!(updated.participant_limit, 5);
    assert!(updated.request_moderation);
    assert_eq!(updated.state, event.state);

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.confirmed_requests, 3);

    Ok(())
}

/// Tests writing the counter inside a transaction that is rolled back.
///
/// Expected: counter unchanged after rollback
#[tokio::test]
async fn rolled_back_counter_is_not_persisted() -> Result<(), DbErr> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 5, true).await?;

    let txn = db.begin().await?;
    EventRepository::new(&txn)
        .save_confirmed_requests(event.id, 4)
        .await?;
    txn.rollback().await?;

    let stored = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.confirmed_requests, 0);

    Ok(())
}
