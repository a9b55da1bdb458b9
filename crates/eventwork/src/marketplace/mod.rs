//! Job listings, applications, and the matching rules between them.

pub mod catalogue;
pub mod domain;
mod seed;
mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalogue::{canonical_city, SUPPORTED_CITIES};
pub use domain::{
    Application, ApplicationId, ApplicationStatus, EventType, JobDraft, JobId, JobListing,
    ReviewDecision, WorkType,
};
pub use store::{MarketplaceError, MarketplaceStore};
pub use views::{
    ApplicationHistory, ApplicationHistoryEntry, AuthoriserDashboard, JobApplicationSummary,
    StatusCounts, WorkerDashboard,
};
