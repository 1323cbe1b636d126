use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Something that can announce the occurrence once the countdown runs out.
pub trait CelebrationNotifier: Send + Sync {
    fn celebrate(&self, title: &str, message: &str) -> Result<()>;
}

/// Service for displaying system notifications.
///
/// Whether it is attached at all is decided by `notify_on_celebration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationService;

impl CelebrationNotifier for NotificationService {
    fn celebrate(&self, title: &str, message: &str) -> Result<()> {
        Notification::new()
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}
