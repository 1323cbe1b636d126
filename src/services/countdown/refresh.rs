//! Writing the resolved date and countdown into a display surface.

use chrono::NaiveDate;

use super::service::CountdownService;
use crate::models::countdown::Countdown;
use crate::services::display::{DisplaySurface, SlotId};

/// What a single refresh computed and which slots accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub target: NaiveDate,
    pub countdown: Countdown,
    pub date_text: String,
    pub countdown_text: String,
    pub date_written: bool,
    pub countdown_written: bool,
}

impl RefreshOutcome {
    pub fn is_celebrating(&self) -> bool {
        self.countdown.is_elapsed()
    }
}

impl CountdownService {
    /// Resolve the next occurrence, count down to it and write both strings
    /// to `display`. Missing slots are skipped; the other write still happens.
    pub fn refresh_display(&self, display: &mut dyn DisplaySurface) -> RefreshOutcome {
        let target = self.find_next_occurrence();
        let countdown = self.countdown_to(target);

        let date_text = self.format_date(target);
        let countdown_text = if countdown.is_elapsed() {
            self.celebration_message().to_string()
        } else {
            self.format_countdown(&countdown)
        };

        let date_written = display.set_text(SlotId::Date, &date_text);
        let countdown_written = display.set_text(SlotId::Countdown, &countdown_text);

        if !date_written || !countdown_written {
            log::trace!(
                "Skipped missing slot(s): date_written={}, countdown_written={}",
                date_written,
                countdown_written
            );
        }

        RefreshOutcome {
            target,
            countdown,
            date_text,
            countdown_text,
            date_written,
            countdown_written,
        }
    }
}
