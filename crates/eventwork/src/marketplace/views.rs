//! Read models behind the worker and authoriser dashboards.

use std::collections::HashSet;

use super::domain::{Application, ApplicationStatus, JobId, JobListing};
use super::store::MarketplaceStore;
use crate::identity::Account;
use crate::storage::KeyValueStore;

/// Per-status tallies over a set of applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally<'a, I>(applications: I) -> Self
    where
        I: IntoIterator<Item = &'a Application>,
    {
        applications
            .into_iter()
            .fold(Self::default(), |mut counts, application| {
                match application.status {
                    ApplicationStatus::Pending => counts.pending += 1,
                    ApplicationStatus::Accepted => counts.accepted += 1,
                    ApplicationStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.pending + self.accepted + self.rejected
    }
}

/// Jobs a worker can still apply to, split by whether they are in the worker's city.
#[derive(Debug, Clone)]
pub struct WorkerDashboard<'a> {
    pub local_jobs: Vec<&'a JobListing>,
    pub other_jobs: Vec<&'a JobListing>,
    pub applications: StatusCounts,
}

/// One owned listing with its review tallies and accepted roster.
#[derive(Debug, Clone)]
pub struct JobApplicationSummary<'a> {
    pub job: &'a JobListing,
    pub accepted: usize,
    pub pending: usize,
    pub accepted_workers: Vec<&'a Application>,
}

#[derive(Debug, Clone)]
pub struct AuthoriserDashboard<'a> {
    pub jobs: Vec<JobApplicationSummary<'a>>,
    pub pending_applications: Vec<&'a Application>,
    /// Accepted applications across every owned listing.
    pub total_accepted: usize,
}

#[derive(Debug, Clone)]
pub struct ApplicationHistoryEntry<'a> {
    pub application: &'a Application,
    pub job: Option<&'a JobListing>,
}

/// A worker's submitted applications joined with their listings.
#[derive(Debug, Clone)]
pub struct ApplicationHistory<'a> {
    pub entries: Vec<ApplicationHistoryEntry<'a>>,
    pub counts: StatusCounts,
}

impl<S> MarketplaceStore<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Any application, whatever its status, hides the job from the worker.
    pub fn worker_dashboard(&self, worker: &Account) -> WorkerDashboard<'_> {
        let submitted = self.get_applications_for_worker(&worker.id);
        let applications = StatusCounts::tally(submitted.iter().copied());
        let applied: HashSet<&JobId> = submitted
            .iter()
            .map(|application| &application.job_id)
            .collect();

        let (local_jobs, other_jobs): (Vec<&JobListing>, Vec<&JobListing>) = self
            .jobs()
            .iter()
            .filter(|job| !applied.contains(&job.id))
            .partition(|job| job.location == worker.location);

        WorkerDashboard {
            local_jobs,
            other_jobs,
            applications,
        }
    }

    pub fn authoriser_dashboard(&self, authoriser: &Account) -> AuthoriserDashboard<'_> {
        let mut pending_applications = Vec::new();
        let mut total_accepted = 0;

        let jobs: Vec<JobApplicationSummary<'_>> = self
            .get_jobs_for_authoriser(&authoriser.id)
            .into_iter()
            .map(|job| {
                let applications = self.get_applications_for_job(&job.id);
                let counts = StatusCounts::tally(applications.iter().copied());
                total_accepted += counts.accepted;

                let mut accepted_workers = Vec::new();
                for application in applications {
                    match application.status {
                        ApplicationStatus::Pending => pending_applications.push(application),
                        ApplicationStatus::Accepted => accepted_workers.push(application),
                        ApplicationStatus::Rejected => {}
                    }
                }

                JobApplicationSummary {
                    job,
                    accepted: counts.accepted,
                    pending: counts.pending,
                    accepted_workers,
                }
            })
            .collect();

        AuthoriserDashboard {
            jobs,
            pending_applications,
            total_accepted,
        }
    }

    pub fn application_history(&self, worker: &Account) -> ApplicationHistory<'_> {
        let submitted = self.get_applications_for_worker(&worker.id);
        let counts = StatusCounts::tally(submitted.iter().copied());
        let entries = submitted
            .into_iter()
            .map(|application| ApplicationHistoryEntry {
                application,
                job: self.get_job_by_id(&application.job_id),
            })
            .collect();

        ApplicationHistory { entries, counts }
    }
}
