use super::*;

/// Tests finding an event owned by the given initiator.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_event_only_for_its_initiator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = EventRepository::new(db);

    let owned = repo.find_by_id_and_initiator(event.id, initiator.id).await?;
    assert_eq!(owned.map(|e| e.id), Some(event.id));

    let foreign = repo.find_by_id_and_initiator(event.id, stranger.id).await?;
    assert!(foreign.is_none());

    Ok(())
}

/// Tests that unpublished events are hidden from the published lookup.
///
/// Expected: Ok(None) for a PENDING event
#[tokio::test]
async fn published_lookup_skips_pending_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let pending = factory::event::EventFactory::new(db, category.id, initiator.id)
        .state("PENDING")
        .build()
        .await?;

    let repo = EventRepository::new(db);

    assert!(repo.find_published_by_id(pending.id).await?.is_none());
    assert!(repo.find_by_id(pending.id).await?.is_some());

    Ok(())
}
