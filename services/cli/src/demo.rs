use std::sync::Arc;

use chrono::{Duration, Local, NaiveTime};
use eventwork::error::AppError;
use eventwork::identity::{AccountCandidate, AccountKind, IdentityError};
use eventwork::marketplace::{EventType, JobDraft, MarketplaceError, ReviewDecision, WorkType};
use eventwork::storage::MemoryStore;

use crate::commands::{
    describe_account, print_job, render_application_history, render_authoriser_dashboard,
    render_worker_dashboard,
};
use crate::infra::AppContext;

/// Walk through signup, posting, applying, and review on throwaway storage.
pub(crate) fn run_demo() -> Result<(), AppError> {
    let mut context = AppContext::open(Arc::new(MemoryStore::default()))?;

    println!("EventWork demo");
    println!(
        "Seeded {} demo listings on first run",
        context.marketplace.jobs().len()
    );

    let owner = context.identity.register(AccountCandidate::authoriser(
        "Rajesh Kumar",
        "9100000001",
        "royal-secret",
        "Mumbai",
        "Royal Caterers",
    ))?;
    println!("\nRegistered {}", describe_account(&owner));

    let event_day = Local::now().date_naive() + Duration::days(7);
    let listing = context.marketplace.post_job(
        JobDraft {
            event_type: EventType::Wedding,
            work_type: WorkType::Serving,
            workers_required: 10,
            payment_per_day: 800,
            date: event_day,
            start_time: demo_time(10),
            end_time: demo_time(22),
            location: owner.location.clone(),
            description: "Wedding lunch and dinner service. Uniform provided.".to_string(),
        },
        &owner,
    )?;
    println!("Posted a job");
    print_job(&listing);

    context.identity.end_session()?;
    let worker = context.identity.register(AccountCandidate::worker(
        "Asha",
        "9000000001",
        "asha-secret",
        "Mumbai",
    ))?;
    println!("\nRegistered {}", describe_account(&worker));

    match context.identity.register(AccountCandidate::worker(
        "Asha Again",
        "9000000001",
        "another-secret",
        "Pune",
    )) {
        Err(IdentityError::DuplicateAccount { .. }) => {
            println!("Second worker signup with the same phone was refused")
        }
        Err(other) => return Err(other.into()),
        Ok(_) => println!("Unexpected: duplicate signup accepted"),
    }

    println!("\nWorker dashboard before applying");
    render_worker_dashboard(&worker, &context.marketplace.worker_dashboard(&worker));

    let application = context.marketplace.apply(&worker, &listing.id)?;
    println!("\nApplied to {}", listing.id);
    match context.marketplace.apply(&worker, &listing.id) {
        Err(MarketplaceError::AlreadyApplied { .. }) => {
            println!("Applying twice to the same job was refused")
        }
        Err(other) => return Err(other.into()),
        Ok(_) => println!("Unexpected: duplicate application accepted"),
    }

    context.identity.end_session()?;
    context
        .identity
        .authenticate(&owner.phone, "royal-secret", AccountKind::Authoriser)?;
    context
        .marketplace
        .set_application_status(&owner, &application.id, ReviewDecision::Accept)?;
    println!("\nAuthoriser dashboard after accepting Asha");
    render_authoriser_dashboard(&owner, &context.marketplace.authoriser_dashboard(&owner));

    println!("\nAsha's applications");
    render_application_history(&context.marketplace.application_history(&worker));

    context.identity.end_session()?;
    Ok(())
}

fn demo_time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}
