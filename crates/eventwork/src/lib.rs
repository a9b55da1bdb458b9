//! State layer for the EventWork catering marketplace: accounts and sessions,
//! job listings, and the applications that match workers to them.

pub mod config;
pub mod error;
pub mod identity;
pub mod marketplace;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
