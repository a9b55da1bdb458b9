use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use eventwork::error::AppError;
use eventwork::identity::{Account, IdentityStore};
use eventwork::marketplace::{canonical_city, MarketplaceStore, SUPPORTED_CITIES};
use eventwork::storage::KeyValueStore;

/// Signup credential policy applied before the identity store is called.
pub(crate) const MIN_CREDENTIAL_LENGTH: usize = 6;

/// Both stores opened once over the same storage handle.
pub(crate) struct AppContext {
    pub(crate) identity: IdentityStore<dyn KeyValueStore>,
    pub(crate) marketplace: MarketplaceStore<dyn KeyValueStore>,
}

impl AppContext {
    pub(crate) fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let identity = IdentityStore::open(storage.clone())?;
        let marketplace = MarketplaceStore::bootstrap(storage)?;
        Ok(Self {
            identity,
            marketplace,
        })
    }

    /// Snapshot of the signed-in account, detached from the identity store borrow.
    pub(crate) fn session(&self) -> Result<Account, AppError> {
        self.identity
            .current_session()
            .cloned()
            .ok_or(AppError::NotSignedIn)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|err| format!("failed to parse '{raw}' as HH:MM ({err})"))
}

pub(crate) fn require_city(raw: &str) -> Result<String, AppError> {
    canonical_city(raw)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "'{raw}' is not a supported city, choose one of {}",
                SUPPORTED_CITIES.join(", ")
            ))
        })
}

pub(crate) fn require_credential(credential: &str, confirm: &str) -> Result<(), AppError> {
    if credential != confirm {
        return Err(AppError::InvalidInput(
            "credentials do not match".to_string(),
        ));
    }
    if credential.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "credential must be at least {MIN_CREDENTIAL_LENGTH} characters"
        )));
    }
    Ok(())
}

pub(crate) fn require_upcoming(date: NaiveDate) -> Result<(), AppError> {
    require_not_before(date, Local::now().date_naive())
}

fn require_not_before(date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if date < today {
        return Err(AppError::InvalidInput(format!(
            "event date {date} is in the past"
        )));
    }
    Ok(())
}
