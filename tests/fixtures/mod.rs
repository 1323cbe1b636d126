// Test fixtures - reusable test data
// Provides consistent clocks, tables and surfaces across the test files
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use cny_countdown::models::occurrence::OccurrenceTable;
use cny_countdown::services::clock::FixedClock;
use cny_countdown::services::countdown::CountdownService;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn local(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
    }

    /// Nine days before Chinese New Year 2025, at midnight
    pub fn nine_days_before_2025() -> DateTime<Local> {
        local(2025, 1, 20, 0, 0, 0)
    }

    /// One second into Chinese New Year 2025
    pub fn just_after_2025() -> DateTime<Local> {
        local(2025, 1, 29, 0, 0, 1)
    }
}

/// Sample tables for testing
pub mod tables {
    use super::*;

    /// A single-entry table, enough for the end-to-end examples
    pub fn only_2025() -> OccurrenceTable {
        OccurrenceTable::from_ymd(&[(2025, 1, 29)]).unwrap()
    }

    pub fn builtin() -> OccurrenceTable {
        OccurrenceTable::chinese_new_year()
    }
}

pub fn service_with(table: OccurrenceTable, now: DateTime<Local>) -> (CountdownService, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now));
    let service = CountdownService::new(table, clock.clone());
    (service, clock)
}
