use super::*;

/// Tests combining category filter and text match in the public search.
///
/// Expected: only published events of the category whose annotation contains the text
#[tokio::test]
async fn search_published_matches_text_in_annotation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let initiator = factory::create_user(db).await?;
    let music = factory::create_category(db).await?;
    let sports = factory::create_category(db).await?;

    let in_music = factory::create_event(db, music.id, initiator.id).await?;
    factory::create_event(db, sports.id, initiator.id).await?;

    let events = EventRepository::new(db)
        .search_published(
            &PublishedEventFilter {
                text: Some("ANNOTATION".to_string()),
                category_ids: Some(vec![music.id]),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![in_music.id]);

    Ok(())
}

/// Tests the administrator's search by event date range.
///
/// Expected: events of any state with the date inside the inclusive range
#[tokio::test]
async fn search_filters_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let initiator = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let next_week = factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(7))
        .state("PENDING")
        .build()
        .await?;
    factory::event::EventFactory::new(db, category.id, initiator.id)
        .event_date(Utc::now() + Duration::days(30))
        .build()
        .await?;

    let events = EventRepository::new(db)
        .search(&EventFilter {
            range_start: Some(Utc::now() + Duration::days(6)),
            range_end: Some(Utc::now() + Duration::days(8)),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![next_week.id]);

    Ok(())
}

/// Tests the category usage check.
///
/// Expected: true for a category with an event, false for an empty one
#[tokio::test]
async fn exists_for_category_reports_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, used, _event) = factory::helpers::create_event_with_dependencies(db).await?;
    let unused = factory::create_category(db).await?;

    let repo = EventRepository::new(db);
    assert!(repo.exists_for_category(used.id).await?);
    assert!(!repo.exists_for_category(unused.id).await?);

    Ok(())
}
