//! Fixtures shared by the unit test modules.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::identity::{Account, AccountId, AccountKind};
use crate::marketplace::{EventType, JobDraft, WorkType};
use crate::storage::{KeyValueStore, StorageError};

/// Reads succeed with nothing stored, every write fails.
pub(crate) struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read only".to_string()))
    }
}

/// Account built directly, skipping credential hashing.
pub(crate) fn account(id: &str, name: &str, kind: AccountKind, location: &str) -> Account {
    Account {
        id: AccountId(id.to_string()),
        name: name.to_string(),
        phone: format!("90000{id:0>5}"),
        credential_hash: "unused".to_string(),
        location: location.to_string(),
        kind,
        company_name: match kind {
            AccountKind::Authoriser => Some(format!("{name} Caterers")),
            AccountKind::Worker => None,
        },
        profile_photo: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn worker(id: &str, location: &str) -> Account {
    account(id, &format!("Worker {id}"), AccountKind::Worker, location)
}

pub(crate) fn authoriser(id: &str, location: &str) -> Account {
    account(id, &format!("Owner {id}"), AccountKind::Authoriser, location)
}

pub(crate) fn draft(location: &str) -> JobDraft {
    JobDraft {
        event_type: EventType::Wedding,
        work_type: WorkType::Serving,
        workers_required: 10,
        payment_per_day: 800,
        date: NaiveDate::from_ymd_opt(2026, 12, 12).expect("valid date"),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
        end_time: NaiveTime::from_hms_opt(22, 0, 0).expect("valid time"),
        location: location.to_string(),
        description: "Evening banquet service".to_string(),
    }
}
