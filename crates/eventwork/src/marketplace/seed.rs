use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::domain::{EventType, JobId, JobListing, WorkType};
use crate::identity::AccountId;

const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const fn seed_time(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time,
        None => panic!("invalid seed time"),
    }
}

struct SeedListing {
    id: &'static str,
    authoriser_id: &'static str,
    authoriser_name: &'static str,
    company_name: &'static str,
    event_type: EventType,
    work_type: WorkType,
    workers_required: u32,
    payment_per_day: u32,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    location: &'static str,
    description: &'static str,
}

const DEMO_LISTINGS: [SeedListing; 3] = [
    SeedListing {
        id: "1",
        authoriser_id: "sample-auth-1",
        authoriser_name: "Rajesh Kumar",
        company_name: "Royal Caterers",
        event_type: EventType::Wedding,
        work_type: WorkType::Serving,
        workers_required: 10,
        payment_per_day: 800,
        date: seed_date(2026, 2, 15),
        start_time: seed_time(10),
        end_time: seed_time(22),
        location: "Mumbai",
        description: "Grand wedding event at Taj Hotel. Looking for experienced servers. \
                      Uniform provided. Meals included.",
    },
    SeedListing {
        id: "2",
        authoriser_id: "sample-auth-2",
        authoriser_name: "Priya Sharma",
        company_name: "Annapurna Catering",
        event_type: EventType::Reception,
        work_type: WorkType::TableSetup,
        workers_required: 5,
        payment_per_day: 600,
        date: seed_date(2026, 2, 20),
        start_time: seed_time(14),
        end_time: seed_time(20),
        location: "Delhi",
        description: "Reception party for 200 guests. Need workers for table setup and \
                      decoration arrangement.",
    },
    SeedListing {
        id: "3",
        authoriser_id: "sample-auth-3",
        authoriser_name: "Amit Patel",
        company_name: "Shubh Caterers",
        event_type: EventType::TempleFunction,
        work_type: WorkType::WaterService,
        workers_required: 8,
        payment_per_day: 500,
        date: seed_date(2026, 2, 18),
        start_time: seed_time(6),
        end_time: seed_time(14),
        location: "Bangalore",
        description: "Temple inauguration ceremony. Workers needed for water and refreshment \
                      service to devotees.",
    },
];

/// Listings written on first run so a fresh install has something to browse.
pub(crate) fn demo_listings(created_at: DateTime<Utc>) -> Vec<JobListing> {
    DEMO_LISTINGS
        .iter()
        .map(|seed| JobListing {
            id: JobId(seed.id.to_string()),
            authoriser_id: AccountId(seed.authoriser_id.to_string()),
            authoriser_name: seed.authoriser_name.to_string(),
            company_name: seed.company_name.to_string(),
            event_type: seed.event_type,
            work_type: seed.work_type,
            workers_required: seed.workers_required,
            payment_per_day: seed.payment_per_day,
            date: seed.date,
            start_time: seed.start_time,
            end_time: seed.end_time,
            location: seed.location.to_string(),
            description: seed.description.to_string(),
            created_at,
        })
        .collect()
}
