use crate::models::countdown::Countdown;

/// `"{days} 天 {hh} : {mm} : {ss}"`; days are never padded. `Elapsed`
/// renders as `placeholder`.
pub fn format_countdown(countdown: &Countdown, placeholder: &str) -> String {
    match *countdown {
        Countdown::Remaining {
            days,
            hours,
            minutes,
            seconds,
        } => format!("{days} 天 {hours:02} : {minutes:02} : {seconds:02}"),
        Countdown::Elapsed => placeholder.to_string(),
    }
}
