use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::AccountId;

/// Identifier wrapper for job listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl JobId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl ApplicationId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of event the caterer is staffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Reception,
    Party,
    TempleFunction,
    Corporate,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Reception,
        EventType::Party,
        EventType::TempleFunction,
        EventType::Corporate,
        EventType::Other,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Reception => "reception",
            EventType::Party => "party",
            EventType::TempleFunction => "temple_function",
            EventType::Corporate => "corporate",
            EventType::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Reception => "Reception",
            EventType::Party => "Birthday Party",
            EventType::TempleFunction => "Temple Function",
            EventType::Corporate => "Corporate Event",
            EventType::Other => "Other Event",
        }
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| format!("unknown event type '{raw}'"))
    }
}

/// Kind of work a listing needs done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Serving,
    Cleaning,
    TableSetup,
    WaterService,
    CookingAssist,
    Other,
}

impl WorkType {
    pub const ALL: [WorkType; 6] = [
        WorkType::Serving,
        WorkType::Cleaning,
        WorkType::TableSetup,
        WorkType::WaterService,
        WorkType::CookingAssist,
        WorkType::Other,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            WorkType::Serving => "serving",
            WorkType::Cleaning => "cleaning",
            WorkType::TableSetup => "table_setup",
            WorkType::WaterService => "water_service",
            WorkType::CookingAssist => "cooking_assist",
            WorkType::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkType::Serving => "Serving Food",
            WorkType::Cleaning => "Cleaning",
            WorkType::TableSetup => "Table Setup",
            WorkType::WaterService => "Water Service",
            WorkType::CookingAssist => "Cooking Assistant",
            WorkType::Other => "Other Work",
        }
    }
}

impl FromStr for WorkType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| format!("unknown work type '{raw}'"))
    }
}

/// Listing fields supplied by the authoriser when posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub event_type: EventType,
    pub work_type: WorkType,
    pub workers_required: u32,
    pub payment_per_day: u32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
}

/// Posted staffing request for a specific event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    pub authoriser_id: AccountId,
    pub authoriser_name: String,
    pub company_name: String,
    pub event_type: EventType,
    pub work_type: WorkType,
    pub workers_required: u32,
    pub payment_per_day: u32,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Outcome an authoriser may record. Either decision can later be replaced by the
/// other; an application never returns to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject,
}

impl From<ReviewDecision> for ApplicationStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Accept => ApplicationStatus::Accepted,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A worker's request to be considered for a listing. Worker details are copied at
/// apply time and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub worker_id: AccountId,
    pub worker_name: String,
    pub worker_phone: String,
    pub worker_location: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// `HH:MM` wall-clock serialization; seconds are accepted when reading.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub(super) fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
            .map_err(|err| {
                serde::de::Error::custom(format!("failed to parse '{raw}' as HH:MM ({err})"))
            })
    }
}
