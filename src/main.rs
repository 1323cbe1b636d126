// CNY Countdown
// Main entry point

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;

use cny_countdown::models::settings::CountdownSettings;
use cny_countdown::services::clock::SystemClock;
use cny_countdown::services::countdown::{CountdownRunner, CountdownService, Readiness};
use cny_countdown::services::display::TerminalDisplay;
use cny_countdown::services::notification::NotificationService;
use cny_countdown::services::scheduler::TokioScheduler;
use cny_countdown::services::settings::{default_settings_path, load_settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting CNY countdown");

    let settings = match default_settings_path() {
        Some(path) => load_settings(&path)?,
        None => {
            log::warn!("No config directory available, using default settings");
            CountdownSettings::default()
        }
    };

    let service = CountdownService::from_settings(&settings, Arc::new(SystemClock))
        .context("failed to build countdown from settings")?;
    match (service.table().first_year(), service.table().last_year()) {
        (Some(first), Some(last)) => {
            log::info!("Occurrence table covers {}..={}", first, last)
        }
        _ => log::warn!("Occurrence table is empty, every target is a January 1 placeholder"),
    }
    let display = Arc::new(Mutex::new(TerminalDisplay::stdout()));

    let mut runner = CountdownRunner::new(
        service,
        display,
        Duration::from_millis(settings.refresh_interval_ms),
    );
    if settings.notify_on_celebration {
        runner = runner.with_notifier(Arc::new(NotificationService));
    }

    // The terminal is attached as soon as the process is running.
    let (ready_tx, ready_rx) = watch::channel(Readiness::Loading);
    ready_tx.send_replace(Readiness::Ready);

    let schedule = runner.start(&TokioScheduler, ready_rx).await?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    schedule.cancel();

    println!();
    log::info!("Stopping CNY countdown");
    Ok(())
}
