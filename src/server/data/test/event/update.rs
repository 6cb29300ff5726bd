use super::*;

/// Tests a partial update of ledger configuration.
///
/// Expected: Ok with limit and moderation changed, title untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                participant_limit: Some(12),
                request_moderation: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.participant_limit, 12);
    assert!(!updated.request_moderation);
    assert_eq!(updated.title, event.title);

    Ok(())
}

/// Tests moving an event to PUBLISHED with a publication timestamp.
///
/// Expected: Ok with state PUBLISHED and published_on set
#[tokio::test]
async fn update_state_sets_publication_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let event = factory::event::EventFactory::new(db, category.id, initiator.id)
        .state("PENDING")
        .build()
        .await?;

    let now = Utc::now();
    let repo = EventRepository::new(db);
    let updated = repo
        .update_state(event.id, EventState::Published, Some(now))
        .await?;

    assert_eq!(updated.state, "PUBLISHED");
    assert!(updated.published_on.is_some());

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo.update(404, UpdateEventParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
