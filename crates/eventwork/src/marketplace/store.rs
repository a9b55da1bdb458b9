use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    Application, ApplicationId, ApplicationStatus, JobDraft, JobId, JobListing, ReviewDecision,
};
use super::seed::demo_listings;
use crate::identity::{Account, AccountId};
use crate::storage::{
    load_collection, save_collection, KeyValueStore, StorageError, APPLICATIONS_KEY, JOBS_KEY,
};

/// Job listings and applications, both kept newest first.
pub struct MarketplaceStore<S: ?Sized> {
    storage: Arc<S>,
    jobs: Vec<JobListing>,
    applications: Vec<Application>,
}

impl<S> MarketplaceStore<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Load both collections, seeding the demo listings when no job collection has
    /// ever been written.
    pub fn bootstrap(storage: Arc<S>) -> Result<Self, MarketplaceError> {
        let jobs = match load_collection::<_, Vec<JobListing>>(&*storage, JOBS_KEY)? {
            Some(jobs) => jobs,
            None => {
                let seeded = demo_listings(Utc::now());
                save_collection(&*storage, JOBS_KEY, &seeded)?;
                info!(listings = seeded.len(), "seeded demo job listings");
                seeded
            }
        };
        let applications: Vec<Application> =
            load_collection(&*storage, APPLICATIONS_KEY)?.unwrap_or_default();

        info!(
            jobs = jobs.len(),
            applications = applications.len(),
            "marketplace store opened"
        );

        Ok(Self {
            storage,
            jobs,
            applications,
        })
    }

    /// Publish a listing on behalf of `authoriser`.
    pub fn post_job(
        &mut self,
        draft: JobDraft,
        authoriser: &Account,
    ) -> Result<JobListing, MarketplaceError> {
        if !authoriser.is_authoriser() {
            return Err(MarketplaceError::Unauthorized(
                "only authorisers can post jobs",
            ));
        }
        if draft.workers_required < 1 {
            return Err(MarketplaceError::InvalidListing(
                "at least one worker must be required",
            ));
        }
        if draft.payment_per_day == 0 {
            return Err(MarketplaceError::InvalidListing(
                "payment per day must be positive",
            ));
        }

        let JobDraft {
            event_type,
            work_type,
            workers_required,
            payment_per_day,
            date,
            start_time,
            end_time,
            location,
            description,
        } = draft;

        let listing = JobListing {
            id: JobId::generate(),
            authoriser_id: authoriser.id.clone(),
            authoriser_name: authoriser.name.clone(),
            company_name: authoriser.display_company().to_string(),
            event_type,
            work_type,
            workers_required,
            payment_per_day,
            date,
            start_time,
            end_time,
            location,
            description,
            created_at: Utc::now(),
        };

        let jobs = prepend(&listing, &self.jobs);
        save_collection(&*self.storage, JOBS_KEY, &jobs)?;
        self.jobs = jobs;

        info!(job_id = %listing.id, authoriser_id = %authoriser.id, "job posted");
        Ok(listing)
    }

    /// Submit a pending application from `worker` to the listing `job_id`.
    pub fn apply(
        &mut self,
        worker: &Account,
        job_id: &JobId,
    ) -> Result<Application, MarketplaceError> {
        if !worker.is_worker() {
            return Err(MarketplaceError::Unauthorized("only workers can apply"));
        }
        if self.get_job_by_id(job_id).is_none() {
            return Err(MarketplaceError::NotFound {
                record: "job",
                id: job_id.0.clone(),
            });
        }
        if self
            .applications
            .iter()
            .any(|application| &application.job_id == job_id && application.worker_id == worker.id)
        {
            warn!(%job_id, worker_id = %worker.id, "duplicate application rejected");
            return Err(MarketplaceError::AlreadyApplied {
                job_id: job_id.clone(),
            });
        }

        let application = Application {
            id: ApplicationId::generate(),
            job_id: job_id.clone(),
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            worker_phone: worker.phone.clone(),
            worker_location: worker.location.clone(),
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };

        let applications = prepend(&application, &self.applications);
        save_collection(&*self.storage, APPLICATIONS_KEY, &applications)?;
        self.applications = applications;

        info!(application_id = %application.id, %job_id, worker_id = %worker.id, "application submitted");
        Ok(application)
    }

    /// Record an authoriser's decision. Only the owner of the parent listing may
    /// review, and a decision may later be replaced by the opposite one.
    pub fn set_application_status(
        &mut self,
        reviewer: &Account,
        application_id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<Application, MarketplaceError> {
        let position = self
            .applications
            .iter()
            .position(|application| &application.id == application_id)
            .ok_or_else(|| MarketplaceError::NotFound {
                record: "application",
                id: application_id.0.clone(),
            })?;

        let job_id = &self.applications[position].job_id;
        let job = self
            .get_job_by_id(job_id)
            .ok_or_else(|| MarketplaceError::NotFound {
                record: "job",
                id: job_id.0.clone(),
            })?;
        if job.authoriser_id != reviewer.id {
            warn!(%application_id, reviewer_id = %reviewer.id, "review rejected, reviewer does not own job");
            return Err(MarketplaceError::Unauthorized(
                "only the job's authoriser can review its applications",
            ));
        }

        let mut applications = self.applications.clone();
        applications[position].status = decision.into();
        save_collection(&*self.storage, APPLICATIONS_KEY, &applications)?;
        self.applications = applications;

        let updated = self.applications[position].clone();
        info!(%application_id, status = updated.status.label(), "application reviewed");
        Ok(updated)
    }

    pub fn get_job_by_id(&self, job_id: &JobId) -> Option<&JobListing> {
        self.jobs.iter().find(|job| &job.id == job_id)
    }

    pub fn get_applications_for_job(&self, job_id: &JobId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| &application.job_id == job_id)
            .collect()
    }

    pub fn get_applications_for_worker(&self, worker_id: &AccountId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| &application.worker_id == worker_id)
            .collect()
    }

    pub fn get_jobs_for_authoriser(&self, authoriser_id: &AccountId) -> Vec<&JobListing> {
        self.jobs
            .iter()
            .filter(|job| &job.authoriser_id == authoriser_id)
            .collect()
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}

fn prepend<T: Clone>(item: &T, existing: &[T]) -> Vec<T> {
    let mut updated = Vec::with_capacity(existing.len() + 1);
    updated.push(item.clone());
    updated.extend_from_slice(existing);
    updated
}

/// Error raised by the marketplace store.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("already applied to job {job_id}")]
    AlreadyApplied { job_id: JobId },
    #[error("{record} '{id}' not found")]
    NotFound { record: &'static str, id: String },
    #[error("invalid job listing: {0}")]
    InvalidListing(&'static str),
    #[error("not permitted: {0}")]
    Unauthorized(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
