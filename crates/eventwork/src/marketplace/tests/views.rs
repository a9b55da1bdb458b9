use super::common::*;
use crate::marketplace::{ApplicationStatus, JobId, ReviewDecision, StatusCounts};

#[test]
fn worker_dashboard_splits_by_city_and_hides_applied_jobs() {
    let (mut store, _storage) = seeded_store();
    let applicant = worker("W1", "Mumbai");

    let before = store.worker_dashboard(&applicant);
    assert_eq!(before.local_jobs.len(), 1);
    assert_eq!(before.other_jobs.len(), 2);
    assert_eq!(before.applications.total(), 0);

    store
        .apply(&applicant, &JobId("2".to_string()))
        .expect("apply succeeds");

    let after = store.worker_dashboard(&applicant);
    assert_eq!(after.local_jobs.len(), 1);
    assert_eq!(after.other_jobs.len(), 1);
    assert!(after
        .other_jobs
        .iter()
        .all(|job| job.id != JobId("2".to_string())));
    assert_eq!(after.applications.pending, 1);
}

#[test]
fn worker_dashboard_hides_jobs_after_any_decision() {
    let (mut store, _storage) = empty_store();
    let owner = authoriser("A1", "Mumbai");
    let job = store.post_job(draft("Mumbai"), &owner).expect("job posts");
    let applicant = worker("W1", "Mumbai");
    let application = store.apply(&applicant, &job.id).expect("apply succeeds");
    store
        .set_application_status(&owner, &application.id, ReviewDecision::Reject)
        .expect("review succeeds");

    let dashboard = store.worker_dashboard(&applicant);
    assert!(dashboard.local_jobs.is_empty());
    assert_eq!(
        dashboard.applications,
        StatusCounts {
            pending: 0,
            accepted: 0,
            rejected: 1,
        }
    );
}

#[test]
fn authoriser_dashboard_counts_per_job_and_overall() {
    let (mut store, _storage) = empty_store();
    let owner = authoriser("A1", "Mumbai");
    let wedding = store.post_job(draft("Mumbai"), &owner).expect("job posts");
    let reception = store.post_job(draft("Pune"), &owner).expect("job posts");
    let other_owner = authoriser("A2", "Mumbai");
    let unrelated = store
        .post_job(draft("Mumbai"), &other_owner)
        .expect("job posts");

    let w1 = worker("W1", "Mumbai");
    let w2 = worker("W2", "Mumbai");
    let w3 = worker("W3", "Pune");
    let a1 = store.apply(&w1, &wedding.id).expect("apply");
    store.apply(&w2, &wedding.id).expect("apply");
    let a3 = store.apply(&w3, &reception.id).expect("apply");
    let a4 = store.apply(&w3, &wedding.id).expect("apply");
    store.apply(&w1, &unrelated.id).expect("apply");

    store
        .set_application_status(&owner, &a1.id, ReviewDecision::Accept)
        .expect("accept");
    store
        .set_application_status(&owner, &a3.id, ReviewDecision::Accept)
        .expect("accept");
    store
        .set_application_status(&owner, &a4.id, ReviewDecision::Reject)
        .expect("reject");

    let dashboard = store.authoriser_dashboard(&owner);
    assert_eq!(dashboard.jobs.len(), 2);
    assert_eq!(dashboard.total_accepted, 2);
    assert_eq!(dashboard.pending_applications.len(), 1);
    assert_eq!(dashboard.pending_applications[0].worker_id, w2.id);

    let wedding_summary = dashboard
        .jobs
        .iter()
        .find(|summary| summary.job.id == wedding.id)
        .expect("wedding summarised");
    assert_eq!(wedding_summary.accepted, 1);
    assert_eq!(wedding_summary.pending, 1);
    assert_eq!(wedding_summary.accepted_workers.len(), 1);
    assert_eq!(wedding_summary.accepted_workers[0].worker_name, w1.name);
}

#[test]
fn application_history_joins_listings() {
    let (mut store, _storage) = seeded_store();
    let applicant = worker("W1", "Delhi");
    store
        .apply(&applicant, &JobId("1".to_string()))
        .expect("apply succeeds");
    store
        .apply(&applicant, &JobId("3".to_string()))
        .expect("apply succeeds");

    let history = store.application_history(&applicant);
    assert_eq!(history.entries.len(), 2);
    assert_eq!(history.counts.pending, 2);
    let first = &history.entries[0];
    assert_eq!(first.application.status, ApplicationStatus::Pending);
    assert_eq!(
        first.job.map(|job| job.company_name.as_str()),
        Some("Shubh Caterers")
    );
}
