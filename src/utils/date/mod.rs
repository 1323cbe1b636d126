// Date utility functions

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone,
};

use crate::models::settings::DateLocale;

/// Midnight at the start of `date` in `tz`.
///
/// A midnight repeated by a DST change resolves to the earlier instant. A
/// midnight skipped by a forward jump resolves to the first instant after
/// the gap, so the result always falls on `date`.
pub fn midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Read midnight with the offset in force the day before the gap.
            let offset = tz
                .offset_from_local_datetime(&(naive - Duration::days(1)))
                .earliest()
                .map(|offset| offset.fix().local_minus_utc())
                .unwrap_or(0);
            tz.from_utc_datetime(&(naive - Duration::seconds(i64::from(offset))))
        }
    }
}

/// Long-form, human readable date in the given locale.
pub fn format_long_date(date: NaiveDate, locale: DateLocale) -> String {
    match locale {
        DateLocale::ZhCn => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        DateLocale::EnUs => date.format("%B %-d, %Y").to_string(),
    }
}
