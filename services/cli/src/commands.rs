use eventwork::error::AppError;
use eventwork::identity::{Account, AccountCandidate, AccountKind};
use eventwork::marketplace::{
    ApplicationHistory, ApplicationId, AuthoriserDashboard, JobDraft, JobId, JobListing,
    ReviewDecision, StatusCounts, WorkerDashboard,
};

use crate::cli::{LoginArgs, PostJobArgs, SignupArgs};
use crate::infra::{require_city, require_credential, require_upcoming, AppContext};

pub(crate) fn signup(context: &mut AppContext, args: SignupArgs) -> Result<(), AppError> {
    let SignupArgs {
        kind,
        name,
        phone,
        credential,
        confirm,
        location,
        company,
        profile_photo,
    } = args;

    require_credential(&credential, &confirm)?;
    let location = require_city(&location)?;
    let kind = AccountKind::from(kind);
    let company_name = match (kind, company) {
        (AccountKind::Authoriser, Some(company)) if !company.trim().is_empty() => Some(company),
        (AccountKind::Authoriser, _) => {
            return Err(AppError::InvalidInput(
                "authorisers must provide a company name".to_string(),
            ))
        }
        (AccountKind::Worker, _) => None,
    };

    let account = context.identity.register(AccountCandidate {
        name,
        phone,
        credential,
        location,
        kind,
        company_name,
        profile_photo,
    })?;

    println!("Account created, signed in as {}", describe_account(&account));
    Ok(())
}

pub(crate) fn login(context: &mut AppContext, args: LoginArgs) -> Result<(), AppError> {
    let account = context
        .identity
        .authenticate(&args.phone, &args.credential, args.kind.into())?;
    println!("Welcome back, {}", describe_account(&account));
    Ok(())
}

pub(crate) fn logout(context: &mut AppContext) -> Result<(), AppError> {
    context.identity.end_session()?;
    println!("Signed out");
    Ok(())
}

pub(crate) fn whoami(context: &AppContext) -> Result<(), AppError> {
    match context.identity.current_session() {
        Some(account) => println!("{}", describe_account(account)),
        None => println!("Not signed in"),
    }
    Ok(())
}

pub(crate) fn post_job(context: &mut AppContext, args: PostJobArgs) -> Result<(), AppError> {
    let authoriser = context.session()?;
    require_upcoming(args.date)?;
    let location = require_city(&args.location)?;

    let listing = context.marketplace.post_job(
        JobDraft {
            event_type: args.event_type,
            work_type: args.work_type,
            workers_required: args.workers,
            payment_per_day: args.pay,
            date: args.date,
            start_time: args.start,
            end_time: args.end,
            location,
            description: args.description,
        },
        &authoriser,
    )?;

    println!("Job posted successfully");
    print_job(&listing);
    Ok(())
}

pub(crate) fn browse(context: &AppContext) -> Result<(), AppError> {
    let worker = context.session()?;
    let dashboard = context.marketplace.worker_dashboard(&worker);
    render_worker_dashboard(&worker, &dashboard);
    Ok(())
}

pub(crate) fn apply(context: &mut AppContext, job_id: String) -> Result<(), AppError> {
    let worker = context.session()?;
    let application = context.marketplace.apply(&worker, &JobId(job_id))?;
    println!(
        "Application {} submitted, status {}",
        application.id,
        application.status.label()
    );
    Ok(())
}

pub(crate) fn applications(context: &AppContext) -> Result<(), AppError> {
    let worker = context.session()?;
    let history = context.marketplace.application_history(&worker);
    render_application_history(&history);
    Ok(())
}

pub(crate) fn review(
    context: &mut AppContext,
    application_id: String,
    decision: ReviewDecision,
) -> Result<(), AppError> {
    let reviewer = context.session()?;
    let application = context.marketplace.set_application_status(
        &reviewer,
        &ApplicationId(application_id),
        decision,
    )?;
    println!(
        "{} ({}) is now {}",
        application.worker_name,
        application.worker_phone,
        application.status.label()
    );
    Ok(())
}

pub(crate) fn dashboard(context: &AppContext) -> Result<(), AppError> {
    let account = context.session()?;
    match account.kind {
        AccountKind::Worker => {
            let dashboard = context.marketplace.worker_dashboard(&account);
            render_worker_dashboard(&account, &dashboard);
        }
        AccountKind::Authoriser => {
            let dashboard = context.marketplace.authoriser_dashboard(&account);
            render_authoriser_dashboard(&account, &dashboard);
        }
    }
    Ok(())
}

pub(crate) fn describe_account(account: &Account) -> String {
    match account.kind {
        AccountKind::Worker => format!(
            "{} (worker, {}, {})",
            account.name, account.phone, account.location
        ),
        AccountKind::Authoriser => format!(
            "{} of {} (authoriser, {}, {})",
            account.name,
            account.display_company(),
            account.phone,
            account.location
        ),
    }
}

pub(crate) fn print_job(job: &JobListing) {
    println!(
        "- [{}] {} | {} at {} | {} workers | {} per day | {} {}-{} | {}",
        job.id,
        job.company_name,
        job.work_type.label(),
        job.event_type.label(),
        job.workers_required,
        job.payment_per_day,
        job.date,
        job.start_time.format("%H:%M"),
        job.end_time.format("%H:%M"),
        job.location
    );
    if !job.description.is_empty() {
        println!("    {}", job.description);
    }
}

fn print_counts(counts: &StatusCounts) {
    println!(
        "Applications: {} total | {} pending | {} accepted | {} rejected",
        counts.total(),
        counts.pending,
        counts.accepted,
        counts.rejected
    );
}

pub(crate) fn render_worker_dashboard(worker: &Account, dashboard: &WorkerDashboard<'_>) {
    print_counts(&dashboard.applications);

    println!(
        "\nJobs in {} ({} available)",
        worker.location,
        dashboard.local_jobs.len()
    );
    if dashboard.local_jobs.is_empty() {
        println!("- none right now");
    }
    for job in &dashboard.local_jobs {
        print_job(job);
    }

    if !dashboard.other_jobs.is_empty() {
        println!(
            "\nJobs in other cities ({} available)",
            dashboard.other_jobs.len()
        );
        for job in &dashboard.other_jobs {
            print_job(job);
        }
    }
}

pub(crate) fn render_authoriser_dashboard(
    authoriser: &Account,
    dashboard: &AuthoriserDashboard<'_>,
) {
    println!(
        "{}: {} jobs posted | {} pending applications | {} workers hired",
        authoriser.display_company(),
        dashboard.jobs.len(),
        dashboard.pending_applications.len(),
        dashboard.total_accepted
    );

    if !dashboard.pending_applications.is_empty() {
        println!("\nPending applications");
        for application in &dashboard.pending_applications {
            println!(
                "- [{}] {} ({}, {}) for job {}",
                application.id,
                application.worker_name,
                application.worker_phone,
                application.worker_location,
                application.job_id
            );
        }
    }

    println!("\nYour jobs");
    if dashboard.jobs.is_empty() {
        println!("- none posted yet");
    }
    for summary in &dashboard.jobs {
        print_job(summary.job);
        println!(
            "    {}/{} accepted, {} pending",
            summary.accepted, summary.job.workers_required, summary.pending
        );
        for application in &summary.accepted_workers {
            println!(
                "    + {} ({})",
                application.worker_name, application.worker_phone
            );
        }
    }
}

pub(crate) fn render_application_history(history: &ApplicationHistory<'_>) {
    print_counts(&history.counts);
    if history.entries.is_empty() {
        println!("- no applications yet");
    }
    for entry in &history.entries {
        let job = match entry.job {
            Some(job) => format!(
                "{} at {} ({}, {})",
                job.work_type.label(),
                job.company_name,
                job.location,
                job.date
            ),
            None => format!("job {} (no longer listed)", entry.application.job_id),
        };
        println!(
            "- [{}] {} | {} | applied {}",
            entry.application.id,
            job,
            entry.application.status.label(),
            entry.application.applied_at.format("%Y-%m-%d")
        );
    }
}
