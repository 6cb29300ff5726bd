use super::*;

/// Tests the public read of events.
///
/// Expected: Ok for a published event, Err(NotFound) for a pending one
#[tokio::test]
async fn only_published_events_are_visible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (initiator, category, published) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let pending = factory::event::EventFactory::new(db, category.id, initiator.id)
        .state("PENDING")
        .build()
        .await?;

    let service = EventService::new(db, &locks);

    let event = service.get_published(published.id).await?;
    assert_eq!(event.id, published.id);
    assert_eq!(event.state, EventState::Published);

    let hidden = service.get_published(pending.id).await;
    assert!(matches!(hidden, Err(AppError::NotFound(_))));

    Ok(())
}
