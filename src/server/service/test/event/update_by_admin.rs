use super::*;

/// Tests publishing a pending event.
///
/// Expected: Ok with PUBLISHED state and `published_on` set
#[tokio::test]
async fn publishes_pending_event() -> Result<(), AppError> {
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
    let event = service.create(params(initiator.id, category.id)).await?;

    let published = service
        .update_by_admin(event.id, admin_action(AdminStateAction::PublishEvent))
        .await?;

    assert_eq!(published.state, EventState::Published);
    assert!(published.published_on.is_some());

    Ok(())
}

/// Tests rejecting a pending event.
///
/// Expected: Ok with CANCELED state and no publication time
#[tokio::test]
async fn rejects_pending_event() -> Result<(), AppError> {
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
    let event = service.create(params(initiator.id, category.id)).await?;

    let rejected = service
        .update_by_admin(event.id, admin_action(AdminStateAction::RejectEvent))
        .await?;

    assert_eq!(rejected.state, EventState::Canceled);
    assert!(rejected.published_on.is_none());

    Ok(())
}

/// Tests admin actions on events that are not pending.
///
/// Expected: Err(InvalidEventState) for a published event, Err(NotFound) for a missing one
#[tokio::test]
async fn only_pending_events_can_be_moderated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let service = EventService::new(db, &locks);

    let result = service
        .update_by_admin(event.id, admin_action(AdminStateAction::RejectEvent))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AdmissionErr(AdmissionError::InvalidEventState { state, .. })) if state == "PUBLISHED"
    ));

    let missing = service
        .update_by_admin(9_999, admin_action(AdminStateAction::PublishEvent))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests editing fields of a pending event without a state action.
///
/// Expected: Ok with new title, date and paid flag, state still PENDING
#[tokio::test]
async fn edits_pending_event_without_action() -> Result<(), AppError> {
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
    let event = service.create(params(initiator.id, category.id)).await?;

    let event_date = Utc::now() + Duration::days(30);
    let updated = service
        .update_by_admin(
            event.id,
            UpdateEventParams {
                title: Some("Rust conference".to_string()),
                event_date: Some(event_date),
                paid: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Rust conference");
    assert_eq!(updated.event_date.timestamp(), event_date.timestamp());
    assert!(updated.paid);
    assert_eq!(updated.state, EventState::Pending);
    assert!(updated.published_on.is_none());

    Ok(())
}

/// Tests an administrator moving the event date closer than one hour.
///
/// Expected: Err(BadRequest) and the event stays PENDING
#[tokio::test]
async fn event_date_within_an_hour_is_bad_request() -> Result<(), AppError> {
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
    let event = service.create(params(initiator.id, category.id)).await?;

    let result = service
        .update_by_admin(
            event.id,
            UpdateEventParams {
                event_date: Some(Utc::now() + Duration::minutes(30)),
                state: Some(EventState::Published),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Ninety minutes is enough for an administrator.
    let published = service
        .update_by_admin(
            event.id,
            UpdateEventParams {
                event_date: Some(Utc::now() + Duration::minutes(90)),
                state: Some(EventState::Published),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(published.state, EventState::Published);

    Ok(())
}

/// Tests an administrator moving an event to a category that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_category_is_not_found() -> Result<(), AppError> {
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
    let event = service.create(params(initiator.id, category.id)).await?;

    let result = service
        .update_by_admin(
            event.id,
            UpdateEventParams {
                category_id: Some(9_999),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
