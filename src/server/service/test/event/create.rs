use super::*;

/// Tests creating an event.
///
/// Expected: Ok with a PENDING event, zero confirmations and no publication time
#[tokio::test]
async fn creates_pending_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let event = EventService::new(db, &locks)
        .create(params(initiator.id, category.id))
        .await?;

    assert_eq!(event.state, EventState::Pending);
    assert_eq!(event.initiator_id, initiator.id);
    assert_eq!(event.ledger.participant_limit, 10);
    assert_eq!(event.ledger.confirmed_requests, 0);
    assert!(event.published_on.is_none());

    Ok(())
}

/// Tests creating an event with an unknown initiator or category.
///
/// Expected: Err(NotFound) in both cases
#[tokio::test]
async fn unknown_initiator_or_category_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let service = EventService::new(db, &locks);

    let missing_user = service.create(params(9_999, category.id)).await;
    assert!(matches!(missing_user, Err(AppError::NotFound(_))));

    let missing_category = service.create(params(initiator.id, 9_999)).await;
    assert!(matches!(missing_category, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating an event that starts less than two hours from now.
///
/// Expected: Err(BadRequest) and no event stored
#[tokio::test]
async fn event_date_within_two_hours_is_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let service = EventService::new(db, &locks);

    let result = service
        .create(CreateEventParams {
            event_date: Utc::now() + Duration::minutes(90),
            ..params(initiator.id, category.id)
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get_user_events(initiator.id).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests that the paid flag is stored.
///
/// Expected: Ok with `paid` set
#[tokio::test]
async fn stores_paid_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let event = EventService::new(db, &locks)
        .create(CreateEventParams {
            paid: true,
            ..params(initiator.id, category.id)
        })
        .await?;

    assert!(event.paid);

    Ok(())
}
