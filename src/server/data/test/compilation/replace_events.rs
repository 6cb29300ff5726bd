use super::*;

/// Tests replacing links with a list holding duplicates and unknown IDs.
///
/// Expected: each existing event linked once, previous links removed
#[tokio::test]
async fn links_each_existing_event_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_compilation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (initiator, category, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, category.id, initiator.id).await?;
    let compilation = factory::compilation::CompilationFactory::new(db)
        .events(vec![first.id])
        .build()
        .await?;

    let repo = CompilationRepository::new(db);
    let linked = repo
        .replace_events(compilation.id, &[second.id, second.id, 9_999])
        .await?;
    assert_eq!(linked, 1);

    let events = repo.find_events(&compilation).await?;
    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![second.id]);

    Ok(())
}

/// Tests replacing links with only unknown IDs.
///
/// Expected: no links remain
#[tokio::test]
async fn unknown_ids_leave_compilation_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_compilation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let compilation = factory::compilation::CompilationFactory::new(db)
        .events(vec![event.id])
        .build()
        .await?;

    let repo = CompilationRepository::new(db);
    let linked = repo.replace_events(compilation.id, &[9_998, 9_999]).await?;

    assert_eq!(linked, 0);
    assert!(repo.find_events(&compilation).await?.is_empty());

    Ok(())
}
