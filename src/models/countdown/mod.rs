use chrono::{DateTime, TimeZone};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time left until a target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Target is in the future. `hours < 24`, `minutes < 60`, `seconds < 60`.
    Remaining {
        days: u64,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
    /// Target is now or already behind us.
    Elapsed,
}

impl Countdown {
    /// Decompose a signed millisecond difference with floor division.
    /// Anything `<= 0` is `Elapsed`; sub-second remainders are dropped.
    pub fn from_millis(diff_ms: i64) -> Self {
        let diff = match u64::try_from(diff_ms) {
            Ok(diff) if diff > 0 => diff,
            _ => return Self::Elapsed,
        };

        let days = diff / MS_PER_DAY;
        let rem = diff % MS_PER_DAY;
        let hours = rem / MS_PER_HOUR;
        let rem = rem % MS_PER_HOUR;
        let minutes = rem / MS_PER_MINUTE;
        let rem = rem % MS_PER_MINUTE;
        let seconds = rem / MS_PER_SECOND;

        // Each unit is bounded by the modulus above, so these never truncate.
        Self::Remaining {
            days,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// Countdown from `now` to `target`.
    pub fn until<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        Self::from_millis(target.clone().signed_duration_since(now.clone()).num_milliseconds())
    }

    pub fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed)
    }

    /// Milliseconds represented by the components, or `None` when elapsed.
    pub fn total_millis(&self) -> Option<u64> {
        match *self {
            Self::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => Some(
                days * MS_PER_DAY
                    + u64::from(hours) * MS_PER_HOUR
                    + u64::from(minutes) * MS_PER_MINUTE
                    + u64::from(seconds) * MS_PER_SECOND,
            ),
            Self::Elapsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    #[test]
    fn non_positive_differences_are_elapsed() {
        assert_eq!(Countdown::from_millis(0), Countdown::Elapsed);
        assert_eq!(Countdown::from_millis(-1), Countdown::Elapsed);
        assert_eq!(Countdown::from_millis(i64::MIN), Countdown::Elapsed);
    }

    #[test]
    fn sub_second_difference_is_zero_remaining() {
        assert_eq!(
            Countdown::from_millis(999),
            Countdown::Remaining {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn decomposes_into_units() {
        let ms = (3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 789) as i64;
        let countdown = Countdown::from_millis(ms);
        assert_eq!(
            countdown,
            Countdown::Remaining {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert_eq!(countdown.total_millis(), Some(ms as u64 - 789));
    }

    #[test]
    fn until_uses_signed_difference() {
        let now = Local::now();
        assert!(Countdown::until(&now, &now).is_elapsed());
        assert!(Countdown::until(&(now - Duration::seconds(1)), &now).is_elapsed());

        let ahead = Countdown::until(&(now + Duration::hours(25)), &now);
        assert_eq!(
            ahead,
            Countdown::Remaining {
                days: 1,
                hours: 1,
                minutes: 0,
                seconds: 0
            }
        );
    }
}
