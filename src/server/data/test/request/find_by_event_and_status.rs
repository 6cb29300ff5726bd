use super::*;

/// Tests filtering an event's requests by status.
///
/// Expected: Ok with only the requests of the event in that status
#[tokio::test]
async fn filters_by_event_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_initiator, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let (_other_initiator, _other_category, other_event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let confirmed =
        factory::helpers::create_requests_for_event(db, event.id, 2, "CONFIRMED").await?;
    factory::helpers::create_requests_for_event(db, event.id, 1, "PENDING").await?;
    factory::helpers::create_requests_for_event(db, other_event.id, 1, "CONFIRMED").await?;

    let repo = ParticipationRequestRepository::new(db);
    let found = repo
        .find_by_event_and_status(event.id, RequestStatus::Confirmed)
        .await?;

    let ids: Vec<i32> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, confirmed.iter().map(|r| r.id).collect::<Vec<_>>());

    Ok(())
}
