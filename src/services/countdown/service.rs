use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate};

use super::format::format_countdown;
use crate::models::countdown::Countdown;
use crate::models::occurrence::OccurrenceTable;
use crate::models::settings::{
    CountdownSettings, DateLocale, SettingsError, DEFAULT_CELEBRATION_MESSAGE,
    DEFAULT_PLACEHOLDER,
};
use crate::services::clock::Clock;
use crate::utils::date::{format_long_date, midnight};

/// Resolves the next occurrence from an immutable table and counts down to it.
///
/// Holds no state between calls apart from the table; every call re-reads
/// the injected clock.
pub struct CountdownService {
    table: OccurrenceTable,
    clock: Arc<dyn Clock>,
    locale: DateLocale,
    placeholder: String,
    celebration_message: String,
}

impl CountdownService {
    pub fn new(table: OccurrenceTable, clock: Arc<dyn Clock>) -> Self {
        Self {
            table,
            clock,
            locale: DateLocale::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            celebration_message: DEFAULT_CELEBRATION_MESSAGE.to_string(),
        }
    }

    pub fn from_settings(
        settings: &CountdownSettings,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let table = settings.occurrence_table()?;
        Ok(Self {
            table,
            clock,
            locale: settings.locale,
            placeholder: settings.placeholder.clone(),
            celebration_message: settings.celebration_message.clone(),
        })
    }

    pub fn table(&self) -> &OccurrenceTable {
        &self.table
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    pub fn celebration_message(&self) -> &str {
        &self.celebration_message
    }

    /// Next occurrence on or after today's date.
    pub fn find_next_occurrence(&self) -> NaiveDate {
        self.table.next_on_or_after(self.clock.today())
    }

    /// Countdown from the clock's current instant to `target`.
    pub fn compute_countdown(&self, target: &DateTime<Local>) -> Countdown {
        Countdown::until(target, &self.clock.now())
    }

    /// Countdown to local midnight at the start of `date`.
    pub fn countdown_to(&self, date: NaiveDate) -> Countdown {
        self.compute_countdown(&midnight(date, &Local))
    }

    pub fn format_countdown(&self, countdown: &Countdown) -> String {
        format_countdown(countdown, &self.placeholder)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        format_long_date(date, self.locale)
    }
}
