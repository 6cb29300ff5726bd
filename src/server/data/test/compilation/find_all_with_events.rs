use super::*;

/// Tests loading compilations with their events in one query.
///
/// Expected: compilations ordered by ID, events ordered by ID, empty ones included
#[tokio::test]
async fn loads_events_per_compilation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_compilation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (initiator, category, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, category.id, initiator.id).await?;

    let full = factory::compilation::CompilationFactory::new(db)
        .events(vec![second.id, first.id])
        .build()
        .await?;
    let empty = factory::create_compilation(db).await?;

    let compilations = CompilationRepository::new(db)
        .find_all_with_events(None)
        .await?;

    assert_eq!(compilations.len(), 2);
    assert_eq!(compilations[0].0.id, full.id);
    let ids: Vec<i32> = compilations[0].1.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(compilations[1].0.id, empty.id);
    assert!(compilations[1].1.is_empty());

    Ok(())
}

/// Tests filtering by the pinned flag.
///
/// Expected: only unpinned compilations when asked for `false`
#[tokio::test]
async fn filters_by_pinned_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_compilation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::compilation::CompilationFactory::new(db)
        .pinned(true)
        .build()
        .await?;
    let unpinned = factory::create_compilation(db).await?;

    let compilations = CompilationRepository::new(db)
        .find_all_with_events(Some(false))
        .await?;

    assert_eq!(compilations.len(), 1);
    assert_eq!(compilations[0].0, unpinned);

    Ok(())
}
