use super::*;

/// Tests that an event without a participant limit confirms every request.
///
/// Verifies the counter keeps growing and never blocks creation even when the event
/// moderates requests.
///
/// Expected: Ok(CONFIRMED) for every requester, counter equal to the number of requests
#[tokio::test]
async fn unlimited_event_confirms_every_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 0, true).await?;

    let service = RequestService::new(db, &locks);
    for _ in 0..5 {
        let requester = factory::create_user(db).await?;
        let request = service.create(requester.id, event.id).await?;

        assert_eq!(request.status, RequestStatus::Confirmed);
        assert_eq!(request.event_id, event.id);
        assert_eq!(request.requester_id, requester.id);
    }

    assert_eq!(confirmed_count(db, event.id).await?, 5);

    Ok(())
}

/// Tests an unmoderated event with a limit.
///
/// Verifies requests auto-confirm until the limit is met and the next one is refused.
///
/// Expected: 3 CONFIRMED, then Err(CapacityExceeded), counter 3
#[tokio::test]
async fn unmoderated_event_confirms_until_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 3, false).await?;

    let service = RequestService::new(db, &locks);
    for _ in 0..3 {
        let requester = factory::create_user(db).await?;
        let request = service.create(requester.id, event.id).await?;
        assert_eq!(request.status, RequestStatus::Confirmed);
    }

    let late = factory::create_user(db).await?;
    let result = service.create(late.id, event.id).await;

    assert!(matches!(
        result,
        Err(AppError::AdmissionErr(AdmissionError::CapacityExceeded { limit: 3, .. }))
    ));
    assert_eq!(confirmed_count(db, event.id).await?, 3);

    Ok(())
}

/// Tests a moderated event with a limit.
///
/// Expected: Ok(PENDING) and the counter stays at 0
#[tokio::test]
async fn moderated_event_holds_requests_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 2, true).await?;

    let service = RequestService::new(db, &locks);
    for _ in 0..4 {
        let requester = factory::create_user(db).await?;
        let request = service.create(requester.id, event.id).await?;
        assert_eq!(request.status, RequestStatus::Pending);
    }

    assert_eq!(confirmed_count(db, event.id).await?, 0);

    Ok(())
}

/// Tests the one-active-request rule.
///
/// Verifies a second request is refused while the first is active and accepted again
/// after the first is canceled.
///
/// Expected: Err(DuplicateRequest), then Ok after cancel
#[tokio::test]
async fn duplicate_request_allowed_after_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 5, true).await?;
    let requester = factory::create_user(db).await?;

    let service = RequestService::new(db, &locks);
    let first = service.create(requester.id, event.id).await?;

    let duplicate = service.create(requester.id, event.id).await;
    assert_eq!(
        duplicate.unwrap_err().to_string(),
        AdmissionError::DuplicateRequest {
            user_id: requester.id,
            event_id: event.id,
        }
        .to_string()
    );

    service.cancel(requester.id, first.id).await?;

    let second = service.create(requester.id, event.id).await?;
    assert_ne!(second.id, first.id);
    assert_eq!(second.status, RequestStatus::Pending);

    Ok(())
}

/// Tests that the initiator cannot apply to their own event.
///
/// Expected: Err(InitiatorRequest)
#[tokio::test]
async fn initiator_cannot_request_own_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (initiator, event) = factory::helpers::create_event_with_capacity(db, 0, true).await?;

    let result = RequestService::new(db, &locks)
        .create(initiator.id, event.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AdmissionErr(AdmissionError::InitiatorRequest { .. }))
    ));

    Ok(())
}

/// Tests applying to an event that is not published.
///
/// Expected: Err(InvalidEventState) and no counter change
#[tokio::test]
async fn rejects_unpublished_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let event = factory::event::EventFactory::new(db, category.id, initiator.id)
        .state("PENDING")
        .build()
        .await?;
    let requester = factory::create_user(db).await?;

    let result = RequestService::new(db, &locks)
        .create(requester.id, event.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AdmissionErr(AdmissionError::InvalidEventState { state, .. })) if state == "PENDING"
    ));
    assert_eq!(confirmed_count(db, event.id).await?, 0);

    Ok(())
}

/// Tests applying with an unknown user or to an unknown event.
///
/// Expected: Err(NotFound) in both cases
#[tokio::test]
async fn missing_user_or_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 0, true).await?;
    let requester = factory::create_user(db).await?;

    let service = RequestService::new(db, &locks);

    let missing_user = service.create(9_999, event.id).await;
    assert!(matches!(missing_user, Err(AppError::NotFound(_))));

    let missing_event = service.create(requester.id, 9_999).await;
    assert!(matches!(missing_event, Err(AppError::NotFound(_))));

    Ok(())
}
