use super::*;

/// Tests inserting a request with an explicit status and creation time.
///
/// Expected: Ok with the stored status string and requester/event ids
#[tokio::test]
async fn creates_request_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let repo = ParticipationRequestRepository::new(db);
    let request = repo
        .create(requester.id, event.id, RequestStatus::Confirmed, Utc::now())
        .await?;

    assert_eq!(request.status, "CONFIRMED");
    assert_eq!(request.requester_id, requester.id);
    assert_eq!(request.event_id, event.id);

    let stored = repo.find_by_id(request.id).await?;
    assert_eq!(stored, Some(request));

    Ok(())
}

/// Tests inserting a request for an event that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;

    let repo = ParticipationRequestRepository::new(db);
    let result = repo
        .create(requester.id, 777, RequestStatus::Pending, Utc::now())
        .await;

    assert!(result.is_err());

    Ok(())
}
