//! Drives the countdown refresh: waits for the display to be attached,
//! refreshes once, then keeps refreshing on a schedule.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;

use super::refresh::RefreshOutcome;
use super::service::CountdownService;
use super::tracker::RefreshTracker;
use crate::services::display::DisplaySurface;
use crate::services::notification::CelebrationNotifier;
use crate::services::scheduler::{ScheduleHandle, Scheduler};

const CELEBRATION_TITLE: &str = "春节";

/// Whether the host has attached the display slots yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Ready,
}

#[derive(Clone)]
pub struct CountdownRunner {
    service: Arc<CountdownService>,
    display: Arc<Mutex<dyn DisplaySurface>>,
    interval: Duration,
    notifier: Option<Arc<dyn CelebrationNotifier>>,
    tracker: Arc<Mutex<RefreshTracker>>,
}

impl CountdownRunner {
    pub fn new(
        service: CountdownService,
        display: Arc<Mutex<dyn DisplaySurface>>,
        interval: Duration,
    ) -> Self {
        Self {
            service: Arc::new(service),
            display,
            interval,
            notifier: None,
            tracker: Arc::new(Mutex::new(RefreshTracker::new())),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn CelebrationNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Wait for `readiness` to report `Ready`, refresh once, then schedule
    /// the repeating refresh. Returns immediately if already ready.
    pub async fn start<S: Scheduler>(
        &self,
        scheduler: &S,
        mut readiness: watch::Receiver<Readiness>,
    ) -> Result<ScheduleHandle> {
        if *readiness.borrow() == Readiness::Loading {
            log::debug!("Display not attached yet, deferring countdown start");
        }
        readiness
            .wait_for(|state| *state == Readiness::Ready)
            .await
            .context("readiness signal closed before the display was attached")?;

        self.tick();

        let runner = self.clone();
        let handle = scheduler.repeat(
            self.interval,
            Box::new(move || {
                runner.tick();
            }),
        );
        log::info!("Countdown refreshing every {:?}", self.interval);
        Ok(handle)
    }

    /// One refresh of the display, plus change logging and notification.
    pub fn tick(&self) -> RefreshOutcome {
        let outcome = {
            let mut display = self.display.lock().unwrap_or_else(PoisonError::into_inner);
            self.service.refresh_display(&mut *display)
        };

        let transition = self
            .tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(&outcome);

        if transition.target_changed {
            log::info!("Next occurrence resolved to {}", outcome.target);
        }
        log::debug!("Countdown refreshed: {}", outcome.countdown_text);

        if transition.celebration_started {
            log::info!("Countdown reached {}", outcome.target);
            if let Some(notifier) = &self.notifier {
                if let Err(err) = notifier.celebrate(CELEBRATION_TITLE, &outcome.countdown_text) {
                    log::warn!("Failed to send celebration notification: {}", err);
                }
            }
        }

        outcome
    }
}
