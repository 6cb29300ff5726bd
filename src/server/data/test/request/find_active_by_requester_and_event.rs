use super::*;

/// Tests that canceled requests do not count as active.
///
/// Expected: Ok(None) while only a canceled request exists, Ok(Some) after a new one
#[tokio::test]
async fn ignores_canceled_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    factory::participation_request::ParticipationRequestFactory::new(db, requester.id, event.id)
        .status("CANCELED")
        .build()
        .await?;

    let repo = ParticipationRequestRepository::new(db);
    assert!(repo
        .find_active_by_requester_and_event(requester.id, event.id)
        .await?
        .is_none());

    let active = factory::create_request(db, requester.id, event.id).await?;

    let found = repo
        .find_active_by_requester_and_event(requester.id, event.id)
        .await?;
    assert_eq!(found.map(|r| r.id), Some(active.id));

    Ok(())
}

/// Tests that rejected requests still count as active.
///
/// Expected: Ok(Some) for a REJECTED request
#[tokio::test]
async fn rejected_request_is_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    factory::participation_request::ParticipationRequestFactory::new(db, requester.id, event.id)
        .status("REJECTED")
        .build()
        .await?;

    let repo = ParticipationRequestRepository::new(db);
    let found = repo
        .find_active_by_requester_and_event(requester.id, event.id)
        .await?;

    assert!(found.is_some());

    Ok(())
}
