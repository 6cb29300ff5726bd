use super::*;

/// Tests the public search over states, dates, text and paid flag.
///
/// Expected: only upcoming PUBLISHED events, latest date first, narrowed by each filter
#[tokio::test]
async fn public_search_lists_upcoming_published_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let soon = factory::event::EventFactory::new(db, category.id, initiator.id)
        .title("Rust Meetup")
        .event_date(Utc::now() + Duration::days(2))
        .build()
        .await?;
    let later = factory::event::EventFactory::new(db, category.id, initiator.id)
        .title("Jazz night")
        .event_date(Utc::now() + Duration::days(10))
        .paid(true)
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id, initiator.id)
        .title("Past rust workshop")
        .event_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id, initiator.id)
        .title("Pending rust talk")
        .state("PENDING")
        .build()
        .await?;

    let service = EventService::new(db, &locks);

    let all = service
        .search_published(PublishedEventFilter::default())
        .await?;
    let ids: Vec<i32> = all.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![later.id, soon.id]);

    let rust = service
        .search_published(PublishedEventFilter {
            text: Some("rust".to_string()),
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = rust.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![soon.id]);

    let paid = service
        .search_published(PublishedEventFilter {
            paid: Some(true),
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = paid.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![later.id]);

    Ok(())
}

/// Tests the public search with a date range that reaches into the past.
///
/// Expected: past published events inside the range are listed
#[tokio::test]
async fn public_search_range_includes_past_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let past = factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(10))
        .build()
        .await?;

    let events = EventService::new(db, &locks)
        .search_published(PublishedEventFilter {
            range_start: Some(Utc::now() - Duration::days(2)),
            range_end: Some(Utc::now() + Duration::days(1)),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![past.id]);

    Ok(())
}

/// Tests the availability filter against each event's ledger.
///
/// Expected: unlimited events and events below their limit, full events left out
#[tokio::test]
async fn public_search_only_available_skips_full_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let unlimited = factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(3))
        .confirmed_requests(50)
        .build()
        .await?;
    let open = factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(2))
        .participant_limit(2)
        .confirmed_requests(1)
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(1))
        .participant_limit(2)
        .confirmed_requests(2)
        .build()
        .await?;

    let events = EventService::new(db, &locks)
        .search_published(PublishedEventFilter {
            only_available: true,
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![unlimited.id, open.id]);

    Ok(())
}

/// Tests invalid public search filters.
///
/// Expected: Err(BadRequest) for a non-positive category and for an inverted range
#[tokio::test]
async fn public_search_rejects_invalid_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let service = EventService::new(db, &locks);

    let bad_category = service
        .search_published(PublishedEventFilter {
            category_ids: Some(vec![1, 0]),
            ..Default::default()
        })
        .await;
    assert!(matches!(bad_category, Err(AppError::BadRequest(_))));

    let inverted = service
        .search_published(PublishedEventFilter {
            range_start: Some(Utc::now() + Duration::days(2)),
            range_end: Some(Utc::now()),
            ..Default::default()
        })
        .await;
    assert!(matches!(inverted, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the administrator's search by initiator, state and category.
///
/// Expected: events in any state matching every given filter, ordered by ID
#[tokio::test]
async fn admin_search_filters_by_users_states_and_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let music = factory::create_category(db).await?;
    let sports = factory::create_category(db).await?;

    let alice_pending = factory::event::EventFactory::new(db, music.id, alice.id)
        .state("PENDING")
        .build()
        .await?;
    let alice_published = factory::event::create_event(db, sports.id, alice.id).await?;
    let bob_pending = factory::event::EventFactory::new(db, music.id, bob.id)
        .state("PENDING")
        .build()
        .await?;

    let service = EventService::new(db, &locks);

    let all = service.search(EventFilter::default()).await?;
    let ids: Vec<i32> = all.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![alice_pending.id, alice_published.id, bob_pending.id]);

    let alice_events = service
        .search(EventFilter {
            initiator_ids: Some(vec![alice.id]),
            ..Default::default()
        })
        .await?;
    assert_eq!(alice_events.len(), 2);

    let pending_music = service
        .search(EventFilter {
            states: Some(vec![EventState::Pending]),
            category_ids: Some(vec![music.id]),
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = pending_music.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![alice_pending.id, bob_pending.id]);

    let bad_user = service
        .search(EventFilter {
            initiator_ids: Some(vec![-1]),
            ..Default::default()
        })
        .await;
    assert!(matches!(bad_user, Err(AppError::BadRequest(_))));

    Ok(())
}
