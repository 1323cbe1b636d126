// Occurrence table model
// Year -> Gregorian date of the annual event, kept in ascending year order

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// First day of the lunar new year for the years the countdown knows about.
pub const CHINESE_NEW_YEAR_DATES: [(i32, u32, u32); 6] = [
    (2025, 1, 29),
    (2026, 2, 17),
    (2027, 2, 6),
    (2028, 1, 26),
    (2029, 2, 13),
    (2030, 2, 3),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate occurrence for year {0}")]
    DuplicateYear(i32),
    #[error("occurrence for year {year} falls on {date}, which is in another year")]
    YearMismatch { year: i32, date: NaiveDate },
    #[error("invalid occurrence date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Static lookup of one date per year.
///
/// Entries are sorted by year on construction, so lookups never depend on
/// the order the caller supplied them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    entries: Vec<(i32, NaiveDate)>,
}

impl Default for OccurrenceTable {
    fn default() -> Self {
        Self::chinese_new_year()
    }
}

impl OccurrenceTable {
    /// Build a table from `(year, date)` pairs in any order.
    pub fn new(entries: impl IntoIterator<Item = (i32, NaiveDate)>) -> Result<Self, TableError> {
        let mut entries: Vec<(i32, NaiveDate)> = entries.into_iter().collect();
        entries.sort_by_key(|(year, _)| *year);

        for pair in entries.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(TableError::DuplicateYear(pair[0].0));
            }
        }

        if let Some((year, date)) = entries.iter().find(|(year, date)| date.year() != *year) {
            return Err(TableError::YearMismatch {
                year: *year,
                date: *date,
            });
        }

        Ok(Self { entries })
    }

    /// Build a table from raw `(year, month, day)` triples.
    pub fn from_ymd(entries: &[(i32, u32, u32)]) -> Result<Self, TableError> {
        let dates = entries
            .iter()
            .map(|&(year, month, day)| {
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(|date| (year, date))
                    .ok_or(TableError::InvalidDate { year, month, day })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dates)
    }

    /// The built-in Chinese New Year table.
    pub fn chinese_new_year() -> Self {
        let entries = CHINESE_NEW_YEAR_DATES
            .iter()
            .filter_map(|&(year, month, day)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (year, date))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, year: i32) -> Option<NaiveDate> {
        self.entries
            .binary_search_by_key(&year, |(y, _)| *y)
            .ok()
            .map(|index| self.entries[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, NaiveDate)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.entries.first().map(|(year, _)| *year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.entries.last().map(|(year, _)| *year)
    }

    /// Returns the earliest occurrence on or after `today`.
    ///
    /// The occurrence day itself counts as upcoming for all of that day. Once
    /// the table is exhausted this falls back to next year's entry, or to
    /// January 1 of next year when the table has no entry for it.
    pub fn next_on_or_after(&self, today: NaiveDate) -> NaiveDate {
        if let Some((_, date)) = self.entries.iter().find(|(_, date)| *date >= today) {
            return *date;
        }

        let next_year = today.year().saturating_add(1);
        self.get(next_year)
            .or_else(|| NaiveDate::from_ymd_opt(next_year, 1, 1))
            .unwrap_or(NaiveDate::MAX)
    }
}
