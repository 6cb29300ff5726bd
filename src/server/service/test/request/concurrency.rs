use super::*;
use crate::server::{config::Config, startup};

/// Tests two concurrent requests for the last seat of an event.
///
/// Both calls are polled together on one runtime thread so they interleave at every
/// await point.
///
/// Expected: exactly one CONFIRMED, the other Err(CapacityExceeded), counter 1
#[tokio::test]
async fn concurrent_creates_never_double_confirm() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 1, false).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let service = RequestService::new(db, &locks);
    let (a, b) = tokio::join!(
        service.create(first.id, event.id),
        service.create(second.id, event.id)
    );

    let confirmed = [&a, &b]
        .iter()
        .filter(|result| matches!(result, Ok(request) if request.status == RequestStatus::Confirmed))
        .count();
    let refused = [&a, &b]
        .iter()
        .filter(|result| {
            matches!(
                result,
                Err(AppError::AdmissionErr(AdmissionError::CapacityExceeded { .. }))
            )
        })
        .count();

    assert_eq!(confirmed, 1);
    assert_eq!(refused, 1);
    assert_eq!(confirmed_count(db, event.id).await?, 1);

    Ok(())
}

/// Tests many requests racing for a few seats on a multi-threaded runtime.
///
/// Expected: exactly `limit` requests confirmed, the rest refused, counter equal to limit
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_creates_respect_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (_initiator, event) = factory::helpers::create_event_with_capacity(db, 3, false).await?;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let requester = factory::create_user(db).await?;
        let db = db.clone();
        let locks = locks.clone();
        let event_id = event.id;

        handles.push(tokio::spawn(async move {
            RequestService::new(&db, &locks)
                .create(requester.id, event_id)
                .await
        }));
    }

    let mut confirmed = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(request) => {
                assert_eq!(request.status, RequestStatus::Confirmed);
                confirmed += 1;
            }
            Err(AppError::AdmissionErr(AdmissionError::CapacityExceeded { .. })) => refused += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(confirmed, 3);
    assert_eq!(refused, 5);
    assert_eq!(confirmed_count(db, event.id).await?, 3);

    Ok(())
}

/// Tests a bulk confirmation racing with a create on a moderated event.
///
/// The bulk update fills the last seat, so the create either lands before it as
/// PENDING or is refused after it.
///
/// Expected: counter never exceeds the limit of 1
#[tokio::test]
async fn bulk_update_and_create_serialize() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = EventLocks::new();

    let (initiator, event) = factory::helpers::create_event_with_capacity(db, 1, true).await?;
    let pending = factory::helpers::create_requests_for_event(db, event.id, 1, "PENDING").await?;
    let latecomer = factory::create_user(db).await?;

    let service = RequestService::new(db, &locks);
    let ids = [pending[0].id];
    let (update, create) = tokio::join!(
        service.update_statuses(
            initiator.id,
            event.id,
            &ids,
            RequestDecision::Confirmed
        ),
        service.create(latecomer.id, event.id)
    );

    let update = update?;
    assert_eq!(update.confirmed.len(), 1);

    match create {
        Ok(request) => assert_eq!(request.status, RequestStatus::Pending),
        Err(e) => assert!(matches!(
            e,
            AppError::AdmissionErr(AdmissionError::CapacityExceeded { .. })
        )),
    }
    assert_eq!(confirmed_count(db, event.id).await?, 1);

    Ok(())
}

/// Tests admissions for two events running in parallel against a file database.
///
/// Each admission reads the ledger before writing it inside a transaction, which a
/// pool of several SQLite connections turns into lock-upgrade failures.
///
/// Expected: every request CONFIRMED, each counter at 5
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn file_database_admits_events_in_parallel() -> Result<(), AppError> {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database_url: format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("eventboard.db").display()
        ),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        stats_server_url: None,
    };
    let db = startup::connect_to_database(&config).await?;
    let locks = EventLocks::new();

    let (_, first) = factory::helpers::create_event_with_capacity(&db, 10, false).await?;
    let (_, second) = factory::helpers::create_event_with_capacity(&db, 10, false).await?;

    let mut handles = Vec::new();
    for event_id in [first.id, second.id].repeat(5) {
        let requester = factory::create_user(&db).await?;
        let db = db.clone();
        let locks = locks.clone();

        handles.push(tokio::spawn(async move {
            RequestService::new(&db, &locks)
                .create(requester.id, event_id)
                .await
        }));
    }

    for handle in handles {
        let request = handle.await.unwrap()?;
        assert_eq!(request.status, RequestStatus::Confirmed);
    }

    assert_eq!(confirmed_count(&db, first.id).await?, 5);
    assert_eq!(confirmed_count(&db, second.id).await?, 5);

    Ok(())
}
