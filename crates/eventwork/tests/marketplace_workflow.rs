//! End-to-end scenarios through the public identity and marketplace stores.
//!
//! Both stores share one storage handle, the way a consumer wires them at startup.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use eventwork::identity::{AccountCandidate, AccountKind, IdentityError, IdentityStore};
use eventwork::marketplace::{
    ApplicationStatus, EventType, JobDraft, MarketplaceError, MarketplaceStore, ReviewDecision,
    WorkType,
};
use eventwork::storage::{FileStore, KeyValueStore, MemoryStore};

fn wedding_draft() -> JobDraft {
    JobDraft {
        event_type: EventType::Wedding,
        work_type: WorkType::Serving,
        workers_required: 10,
        payment_per_day: 800,
        date: NaiveDate::from_ymd_opt(2026, 12, 12).expect("valid date"),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
        end_time: NaiveTime::from_hms_opt(22, 0, 0).expect("valid time"),
        location: "Mumbai".to_string(),
        description: "Reception dinner for 300 guests".to_string(),
    }
}

fn open_stores<S>(storage: Arc<S>) -> (IdentityStore<S>, MarketplaceStore<S>)
where
    S: KeyValueStore,
{
    let identity = IdentityStore::open(storage.clone()).expect("identity store opens");
    let marketplace = MarketplaceStore::bootstrap(storage).expect("marketplace bootstraps");
    (identity, marketplace)
}

#[test]
fn signup_duplicate_and_login_scenarios() {
    let storage = Arc::new(MemoryStore::default());
    let (mut identity, _marketplace) = open_stores(storage);

    let asha = identity
        .register(AccountCandidate::worker(
            "Asha",
            "9000000001",
            "asha-secret",
            "Mumbai",
        ))
        .expect("first signup succeeds");
    assert_eq!(identity.current_session(), Some(&asha));

    let duplicate = identity.register(AccountCandidate::worker(
        "Someone Else",
        "9000000001",
        "different",
        "Delhi",
    ));
    assert!(matches!(
        duplicate,
        Err(IdentityError::DuplicateAccount { .. })
    ));
    assert_eq!(identity.accounts().len(), 1);

    identity.end_session().expect("logout");
    identity.end_session().expect("second logout is a no-op");
    assert!(identity.current_session().is_none());

    assert!(matches!(
        identity.authenticate("9000000001", "wrong", AccountKind::Worker),
        Err(IdentityError::InvalidCredentials)
    ));
    let session = identity
        .authenticate("9000000001", "asha-secret", AccountKind::Worker)
        .expect("login succeeds");
    assert_eq!(session, asha);
    assert_eq!(identity.current_session(), Some(&asha));
}

#[test]
fn post_apply_and_review_scenarios() {
    let storage = Arc::new(MemoryStore::default());
    let (mut identity, mut marketplace) = open_stores(storage);

    let owner = identity
        .register(AccountCandidate::authoriser(
            "Rajesh Kumar",
            "9100000001",
            "royal-secret",
            "Mumbai",
            "Royal Caterers",
        ))
        .expect("authoriser signs up");
    let job = marketplace
        .post_job(wedding_draft(), &owner)
        .expect("job posts");
    assert_eq!(job.company_name, "Royal Caterers");

    let worker = identity
        .register(AccountCandidate::worker(
            "Asha",
            "9000000001",
            "asha-secret",
            "Mumbai",
        ))
        .expect("worker signs up");
    let application = marketplace.apply(&worker, &job.id).expect("apply succeeds");
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert!(matches!(
        marketplace.apply(&worker, &job.id),
        Err(MarketplaceError::AlreadyApplied { .. })
    ));
    assert_eq!(marketplace.applications().len(), 1);

    marketplace
        .set_application_status(&owner, &application.id, ReviewDecision::Accept)
        .expect("owner accepts");

    let for_job = marketplace.get_applications_for_job(&job.id);
    let accepted = for_job
        .iter()
        .filter(|app| app.status == ApplicationStatus::Accepted)
        .count();
    let pending = for_job
        .iter()
        .filter(|app| app.status == ApplicationStatus::Pending)
        .count();
    assert_eq!((accepted, pending), (1, 0));

    let for_worker = marketplace.get_applications_for_worker(&worker.id);
    assert_eq!(for_worker.len(), 1);
    assert_eq!(for_worker[0].status, ApplicationStatus::Accepted);

    let dashboard = marketplace.authoriser_dashboard(&owner);
    assert_eq!(dashboard.total_accepted, 1);
    assert!(dashboard.pending_applications.is_empty());
}

#[test]
fn bootstrap_seeds_once_across_runs() {
    let storage = Arc::new(MemoryStore::default());

    let first = MarketplaceStore::bootstrap(storage.clone()).expect("first run");
    assert_eq!(first.jobs().len(), 3);
    let seeded: Vec<_> = first.jobs().to_vec();
    drop(first);

    let second = MarketplaceStore::bootstrap(storage).expect("second run");
    assert_eq!(second.jobs(), seeded.as_slice());
}

#[test]
fn file_backed_state_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Arc::new(FileStore::new(dir.path()));
    let (mut identity, mut marketplace) = open_stores(storage);

    let worker = identity
        .register(AccountCandidate::worker(
            "Asha",
            "9000000001",
            "asha-secret",
            "Mumbai",
        ))
        .expect("worker signs up");
    let seeded_job = marketplace.jobs()[0].id.clone();
    let application = marketplace
        .apply(&worker, &seeded_job)
        .expect("apply succeeds");
    drop(identity);
    drop(marketplace);

    let (mut identity, marketplace) = open_stores(Arc::new(FileStore::new(dir.path())));
    assert_eq!(identity.accounts(), &[worker.clone()]);
    assert_eq!(identity.current_session(), Some(&worker));
    assert_eq!(marketplace.jobs().len(), 3);
    assert_eq!(marketplace.applications(), &[application]);

    identity
        .authenticate("9000000001", "asha-secret", AccountKind::Worker)
        .expect("hashed credential verifies after restart");
}
